//! Change events broadcast after each applied intent
//!
//! Views subscribe instead of holding their own copy of the model: every
//! mutation produces one event, and the subscriber re-reads the snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::TableId;

/// State-change notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorEvent {
    /// The slot cursor moved
    SlotChanged { index: usize, label: String },
    /// A table's booked flag flipped within one slot
    TableToggled {
        slot_index: usize,
        table_id: TableId,
        booked: bool,
    },
    /// The area filter was set or cleared
    AreaFilterChanged { area: Option<String> },
}

impl fmt::Display for FloorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorEvent::SlotChanged { .. } => write!(f, "SLOT_CHANGED"),
            FloorEvent::TableToggled { .. } => write!(f, "TABLE_TOGGLED"),
            FloorEvent::AreaFilterChanged { .. } => write!(f, "AREA_FILTER_CHANGED"),
        }
    }
}
