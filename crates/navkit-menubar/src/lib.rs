#![forbid(unsafe_code)]

//! Accessible hierarchical menubar navigation controller.
//!
//! Turns an arbitrary nested list structure into a fully accessible,
//! keyboard-and-pointer-driven menubar with multi-level popups, roving
//! focus, and first-character search — headlessly, against any tree that
//! implements [`navkit_core::node::HostTree`].
//!
//! # Usage
//!
//! ```ignore
//! use navkit_menubar::MenubarController;
//! use navkit_core::event::KeyEvent;
//!
//! let mut controller = MenubarController::new();
//! controller.mount(&mut host, root);
//!
//! // Boundary adapter routes host events in:
//! if controller.handle_key(&mut host, focused_item, event).is_consumed() {
//!     // stop propagation, suppress default handling
//! }
//!
//! controller.teardown(&mut host);
//! ```
//!
//! # Submodules
//!
//! - [`scan`]: one-time structural discovery (decoration + recursive walk)
//! - [`registry`]: per-menu metadata keyed by derived stable identifiers
//! - [`dispatch`]: the keyboard transition table and click handling
//! - [`controller`]: the owning state value and its lifecycle

pub mod controller;
pub mod dispatch;
pub mod registry;
pub mod scan;

mod focus;
mod popup;

pub use controller::{MenubarConfig, MenubarController};
pub use dispatch::EventResult;
pub use registry::{ItemRecord, MenuId, MenuKind, MenuRecord, MenuRegistry};
pub use scan::{ScanOutcome, containing_menu, decorate, find_root_list, menu_id_of, scan};
