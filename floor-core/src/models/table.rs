//! Table Model

use serde::{Deserialize, Serialize};

/// Stable identity key of a table within the catalog
pub type TableId = i64;

/// Footprint applied when a table carries no explicit size
pub const DEFAULT_TABLE_WIDTH: f32 = 100.0;
pub const DEFAULT_TABLE_HEIGHT: f32 = 80.0;

/// Table entity: one bookable table on the floor plan
///
/// Position and size are in layout units with `(x, y)` as the top-left
/// anchor. The catalog is fixed for the process lifetime, so there are no
/// create/update payload types for tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub seats: i32,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Area tag used for filtering ("Garden", "1st Floor", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl Table {
    /// Effective footprint, with defaults for tables that omit a size
    pub fn render_size(&self) -> (f32, f32) {
        (
            self.width.unwrap_or(DEFAULT_TABLE_WIDTH),
            self.height.unwrap_or(DEFAULT_TABLE_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_size_defaults_apply_per_axis() {
        let table = Table {
            id: 1,
            seats: 2,
            x: 0.0,
            y: 0.0,
            width: Some(150.0),
            height: None,
            area: None,
        };
        assert_eq!(table.render_size(), (150.0, DEFAULT_TABLE_HEIGHT));
    }
}
