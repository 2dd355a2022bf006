//! FloorManager - intent processing and change broadcasting
//!
//! The manager owns every piece of mutable state (the booking ledger, the
//! slot cursor and the area filter) plus the immutable catalog and slot
//! sequence. Views never touch state directly:
//!
//! ```text
//! apply(intent)
//!     ├─ 1. Mutate cursor / ledger / filter
//!     ├─ 2. Broadcast the matching FloorEvent
//!     └─ 3. Return the refreshed FloorSnapshot
//! ```
//!
//! Statistics are recomputed inside every snapshot, so they can never go
//! stale relative to the filter or the current slot's bookings.

pub mod ledger;

pub use ledger::BookingLedger;

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::catalog::TableCatalog;
use crate::events::FloorEvent;
use crate::intent::FloorIntent;
use crate::models::{Table, TableId};
use crate::slots::{SlotCursor, TimeSlots};
use crate::stats::TableStats;

/// Event broadcast channel capacity; a lagging subscriber only loses old
/// events, it never blocks a mutation
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Render inputs handed to the view on every state change
#[derive(Debug, Clone, Serialize)]
pub struct FloorSnapshot {
    pub slot_index: usize,
    pub slot_label: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_area: Option<String>,
    /// All area tags known to the catalog (for the filter bar)
    pub areas: Vec<String>,
    /// Effective table list, post-filter
    pub tables: Vec<Table>,
    /// Booked flags for the current slot; missing id = available
    pub bookings: HashMap<TableId, bool>,
    pub stats: TableStats,
}

/// Owner of the booking record and the slot cursor
pub struct FloorManager {
    catalog: TableCatalog,
    slots: TimeSlots,
    cursor: SlotCursor,
    ledger: BookingLedger,
    selected_area: Option<String>,
    event_tx: broadcast::Sender<FloorEvent>,
}

impl std::fmt::Debug for FloorManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorManager")
            .field("tables", &self.catalog.len())
            .field("slots", &self.slots.len())
            .field("slot_index", &self.cursor.index())
            .field("selected_area", &self.selected_area)
            .field("booked_entries", &self.ledger.booked_count())
            .finish()
    }
}

impl FloorManager {
    /// Create a manager over a catalog and slot sequence; every table starts
    /// available in every slot
    pub fn new(catalog: TableCatalog, slots: TimeSlots) -> Self {
        let cursor = SlotCursor::new(slots.len());
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        tracing::info!(
            tables = catalog.len(),
            slots = slots.len(),
            "floor manager started"
        );
        Self {
            catalog,
            slots,
            cursor,
            ledger: BookingLedger::new(),
            selected_area: None,
            event_tx,
        }
    }

    /// Built-in floor layout with the standard evening slots
    pub fn with_default_floor() -> Self {
        Self::new(TableCatalog::default_floor(), TimeSlots::evening())
    }

    /// Subscribe to change events. Mutations never fail when there are no
    /// subscribers.
    pub fn subscribe(&self) -> broadcast::Receiver<FloorEvent> {
        self.event_tx.subscribe()
    }

    /// Apply one view intent and return the refreshed render inputs
    pub fn apply(&mut self, intent: FloorIntent) -> FloorSnapshot {
        match intent {
            FloorIntent::SelectTimeSlot { index } => {
                let index = self.cursor.select(index);
                self.emit_slot_changed(index);
            }
            FloorIntent::PreviousSlot => {
                if self.cursor.previous() {
                    self.emit_slot_changed(self.cursor.index());
                }
            }
            FloorIntent::NextSlot => {
                if self.cursor.next() {
                    self.emit_slot_changed(self.cursor.index());
                }
            }
            FloorIntent::ToggleTable { table_id } => {
                let slot_index = self.cursor.index();
                let booked = self.ledger.toggle(slot_index, table_id);
                tracing::info!(slot_index, table_id, booked, "table toggled");
                let _ = self.event_tx.send(FloorEvent::TableToggled {
                    slot_index,
                    table_id,
                    booked,
                });
            }
            FloorIntent::SelectArea { area } => {
                // Re-selecting the active area clears the filter
                self.selected_area = match area {
                    Some(area) if self.selected_area.as_deref() == Some(area.as_str()) => None,
                    other => other,
                };
                tracing::info!(area = ?self.selected_area, "area filter changed");
                let _ = self.event_tx.send(FloorEvent::AreaFilterChanged {
                    area: self.selected_area.clone(),
                });
            }
        }
        self.snapshot()
    }

    fn emit_slot_changed(&self, index: usize) {
        let label = self.slots.get(index).unwrap_or_default().to_string();
        tracing::info!(index, %label, "time slot changed");
        let _ = self.event_tx.send(FloorEvent::SlotChanged { index, label });
    }

    pub fn catalog(&self) -> &TableCatalog {
        &self.catalog
    }

    pub fn slots(&self) -> &TimeSlots {
        &self.slots
    }

    pub fn slot_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn selected_area(&self) -> Option<&str> {
        self.selected_area.as_deref()
    }

    /// Booked flags for an arbitrary slot (empty for an unseen one)
    pub fn bookings_for_slot(&self, slot: usize) -> HashMap<TableId, bool> {
        self.ledger.bookings_for_slot(slot)
    }

    /// Booked flags for the current slot
    pub fn current_bookings(&self) -> HashMap<TableId, bool> {
        self.ledger.bookings_for_slot(self.cursor.index())
    }

    /// Current render inputs: effective tables, the slot's booking map and a
    /// freshly computed statistics triple
    pub fn snapshot(&self) -> FloorSnapshot {
        let bookings = self.current_bookings();
        let tables: Vec<Table> = self
            .catalog
            .filter_by_area(self.selected_area.as_deref())
            .into_iter()
            .cloned()
            .collect();
        let stats = TableStats::compute(tables.iter(), &bookings);
        FloorSnapshot {
            slot_index: self.cursor.index(),
            slot_label: self
                .slots
                .get(self.cursor.index())
                .unwrap_or_default()
                .to_string(),
            can_go_previous: self.cursor.can_go_previous(),
            can_go_next: self.cursor.can_go_next(),
            selected_area: self.selected_area.clone(),
            areas: self.catalog.areas(),
            tables,
            bookings,
            stats,
        }
    }
}

#[cfg(test)]
mod tests;
