//! Time slots and the slot cursor
//!
//! A booking day is a fixed, ordered sequence of slot labels. The cursor is
//! the only navigation state: previous/next refuse to move past the ends
//! and direct selection clamps into range, so navigation never fails.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Fixed ordered sequence of time-slot labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlots {
    labels: Vec<String>,
}

impl TimeSlots {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// The standard evening service: six one-hour windows from 4 PM to 10 PM
    pub fn evening() -> Self {
        let mut labels = Vec::with_capacity(6);
        for hour in 16u32..22 {
            let Some(start) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                continue;
            };
            let Some(end) = NaiveTime::from_hms_opt(hour + 1, 0, 0) else {
                continue;
            };
            labels.push(format!(
                "{} - {}",
                start.format("%-I:%M %p"),
                end.format("%-I:%M %p")
            ));
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

/// Cursor over a slot sequence, invariant `0 <= index < len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCursor {
    index: usize,
    len: usize,
}

impl SlotCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to an index, clamped into range; returns the effective index
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index.min(self.last());
        self.index
    }

    /// Step back one slot; returns whether the cursor moved
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one slot; returns whether the cursor moved
    pub fn next(&mut self) -> bool {
        if self.index < self.last() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index < self.last()
    }
}
