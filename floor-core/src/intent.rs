//! Intents - the view-to-core command surface
//!
//! Every user action on the floor plan maps to exactly one variant, applied
//! through [`FloorManager::apply`](crate::store::FloorManager::apply). All
//! intents are total: out-of-range slot indexes clamp, unknown table ids
//! are accepted writes and unknown areas simply yield an empty visible set.
//!
//! The serde shape keeps the JSON self-describing:
//!
//! ```json
//! { "type": "ToggleTable", "data": { "table_id": 3 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::TableId;

/// User intent emitted by the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FloorIntent {
    /// Jump to a time slot by index (clamped into range)
    SelectTimeSlot { index: usize },
    /// Step to the previous slot; a no-op at the first
    PreviousSlot,
    /// Step to the next slot; a no-op at the last
    NextSlot,
    /// Flip the booked flag for a table within the current slot
    ToggleTable { table_id: TableId },
    /// Set or clear the area filter; re-selecting the active area clears it
    SelectArea { area: Option<String> },
}
