//! Occupancy statistics
//!
//! Pure derivation from a table list and one slot's booking map. Cheap
//! enough to recompute on every read, so nothing here is ever cached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Table, TableId};

/// Count triple shown next to the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableStats {
    pub total: usize,
    pub booked: usize,
    pub available: usize,
}

impl TableStats {
    /// Derive counts for the given tables against a slot's booking map.
    ///
    /// `available` is `total - booked` by construction, so the invariant
    /// `available + booked == total` cannot be violated.
    pub fn compute<'a, I>(tables: I, bookings: &HashMap<TableId, bool>) -> Self
    where
        I: IntoIterator<Item = &'a Table>,
    {
        let mut total = 0;
        let mut booked = 0;
        for table in tables {
            total += 1;
            if bookings.get(&table.id).copied().unwrap_or(false) {
                booked += 1;
            }
        }
        Self {
            total,
            booked,
            available: total - booked,
        }
    }
}
