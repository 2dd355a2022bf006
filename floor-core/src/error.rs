//! Error types for the floor-plan core
//!
//! Only catalog construction can fail. The runtime operations (toggling,
//! slot navigation, area filtering) are total: out-of-range indexes clamp
//! and unknown ids are accepted writes.

use crate::models::TableId;
use thiserror::Error;

/// Catalog construction / loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate table id {0}")]
    DuplicateId(TableId),

    #[error("table id must be positive, got {0}")]
    InvalidId(TableId),

    #[error("table {id} has invalid seat count {seats}")]
    InvalidSeats { id: TableId, seats: i32 },

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
