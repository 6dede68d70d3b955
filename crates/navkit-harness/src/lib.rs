#![forbid(unsafe_code)]

//! Test infrastructure for navkit.
//!
//! - **Synthetic trees**: an arena-backed [`node::HostTree`] implementation
//!   that records every mutation the controller applies, so tests can
//!   assert on observable state instead of poking at a real display tree.
//! - **Fixtures**: a compact JSON schema for declaring menu structures,
//!   used by the integration and property tests.
//!
//! # Quick Start
//!
//! ```
//! use navkit_harness::fixture;
//!
//! let (tree, root) = fixture::from_json(
//!     r#"{"items":[{"text":"Home"},{"text":"About","items":[{"text":"Team"}]}]}"#,
//! ).unwrap();
//! assert!(tree.find_item_by_text("About").is_some());
//! let _ = root;
//! ```

pub mod fixture;
pub mod synthetic;

pub use fixture::{ItemFixture, MenuFixture};
pub use synthetic::{NodeSpec, ObservableState, SyntheticTree};

// Re-export types harness users always need alongside the tree.
pub use navkit_core::geometry::Rect;
pub use navkit_core::node;
