//! Floor-plan booking core
//!
//! The booking state model behind the restaurant floor-plan UI: a fixed
//! table catalog, a per-time-slot booking ledger, derived occupancy
//! statistics, and an optional area filter. The view layer talks to the
//! core exclusively through [`FloorIntent`] and reads back a
//! [`FloorSnapshot`] after every change.

pub mod catalog;
pub mod error;
pub mod events;
pub mod intent;
pub mod models;
pub mod slots;
pub mod stats;
pub mod store;

// Re-exports
pub use catalog::TableCatalog;
pub use error::CatalogError;
pub use events::FloorEvent;
pub use intent::FloorIntent;
pub use models::{Table, TableId};
pub use slots::{SlotCursor, TimeSlots};
pub use stats::TableStats;
pub use store::{BookingLedger, FloorManager, FloorSnapshot};
