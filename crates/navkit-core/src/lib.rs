#![forbid(unsafe_code)]

//! Core: host-tree abstraction, input normalization, and geometry for navkit.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod node;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
