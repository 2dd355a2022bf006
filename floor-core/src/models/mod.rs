//! Data models
//!
//! Catalog entry types shared between the core and the view layer.
//! All IDs are `i64`.

pub mod table;

// Re-exports
pub use table::*;
