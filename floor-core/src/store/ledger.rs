//! Booking ledger - the sparse (slot, table) -> booked record
//!
//! Two-level mapping: slot index -> (table id -> booked). Absence means
//! available, and a toggle back to available removes the entry, so the
//! ledger never stores an explicit `false`. The ledger knows nothing about
//! the catalog; id validation, where wanted, belongs to the caller.

use std::collections::HashMap;

use crate::models::TableId;

/// All mutable booking state for every time slot
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    slots: HashMap<usize, HashMap<TableId, bool>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Booked flags for one slot. Unseen slots read as an empty map, which
    /// downstream code treats as "everything available".
    pub fn bookings_for_slot(&self, slot: usize) -> HashMap<TableId, bool> {
        self.slots.get(&slot).cloned().unwrap_or_default()
    }

    pub fn is_booked(&self, slot: usize, table_id: TableId) -> bool {
        self.slots
            .get(&slot)
            .and_then(|m| m.get(&table_id))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the flag for `(slot, table_id)` and return the new value.
    ///
    /// Only this single entry changes; slots are fully independent booking
    /// spaces over the same catalog.
    pub fn toggle(&mut self, slot: usize, table_id: TableId) -> bool {
        let slot_map = self.slots.entry(slot).or_default();
        if slot_map.remove(&table_id).unwrap_or(false) {
            // was booked, now available again; drop empty slot maps so the
            // ledger stays a sparse set
            if slot_map.is_empty() {
                self.slots.remove(&slot);
            }
            false
        } else {
            slot_map.insert(table_id, true);
            true
        }
    }

    /// Booked entries across all slots (diagnostics only)
    pub fn booked_count(&self) -> usize {
        self.slots.values().map(HashMap::len).sum()
    }
}
