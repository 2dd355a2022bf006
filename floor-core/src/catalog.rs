//! Table catalog - the fixed floor layout
//!
//! Loaded once at startup (built-in layout or a JSON file) and immutable
//! afterwards. The catalog validates identity invariants on construction;
//! everything downstream can assume ids are unique and positive.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::error::CatalogError;
use crate::models::{Table, TableId};

/// Immutable list of table descriptors
#[derive(Debug, Clone, Serialize)]
pub struct TableCatalog {
    tables: Vec<Table>,
}

impl TableCatalog {
    /// Build a catalog, enforcing unique positive ids and positive seat counts
    pub fn new(tables: Vec<Table>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<TableId> = HashSet::with_capacity(tables.len());
        for table in &tables {
            if table.id <= 0 {
                return Err(CatalogError::InvalidId(table.id));
            }
            if table.seats <= 0 {
                return Err(CatalogError::InvalidSeats {
                    id: table.id,
                    seats: table.seats,
                });
            }
            if !seen.insert(table.id) {
                return Err(CatalogError::DuplicateId(table.id));
            }
        }
        Ok(Self { tables })
    }

    /// Parse a catalog from a JSON array of tables
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let tables: Vec<Table> = serde_json::from_str(json)?;
        Self::new(tables)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Distinct area tags in first-appearance order
    pub fn areas(&self) -> Vec<String> {
        let mut areas = Vec::new();
        for table in &self.tables {
            if let Some(area) = &table.area
                && !areas.contains(area)
            {
                areas.push(area.clone());
            }
        }
        areas
    }

    /// Visible subset for an area filter: everything when `None`, else the
    /// tables tagged with exactly that area
    pub fn filter_by_area(&self, area: Option<&str>) -> Vec<&Table> {
        match area {
            None => self.tables.iter().collect(),
            Some(area) => self
                .tables
                .iter()
                .filter(|t| t.area.as_deref() == Some(area))
                .collect(),
        }
    }

    /// The built-in eleven-table floor: Garden, Fountain and two indoor floors
    pub fn default_floor() -> Self {
        let table = |id, seats, x, y, width, area: &str| Table {
            id,
            seats,
            x,
            y,
            width: Some(width),
            height: Some(80.0),
            area: Some(area.to_string()),
        };
        Self {
            tables: vec![
                // Garden area
                table(1, 4, 50.0, 50.0, 120.0, "Garden"),
                table(2, 6, 250.0, 50.0, 150.0, "Garden"),
                table(3, 4, 50.0, 180.0, 120.0, "Garden"),
                table(4, 4, 250.0, 180.0, 120.0, "Garden"),
                // Fountain area
                table(5, 8, 50.0, 320.0, 180.0, "Fountain"),
                table(6, 6, 280.0, 320.0, 150.0, "Fountain"),
                // 1st Floor
                table(7, 2, 50.0, 460.0, 80.0, "1st Floor"),
                table(8, 2, 160.0, 460.0, 80.0, "1st Floor"),
                table(9, 4, 280.0, 460.0, 120.0, "1st Floor"),
                // 2nd Floor
                table(10, 4, 50.0, 590.0, 120.0, "2nd Floor"),
                table(11, 6, 220.0, 590.0, 150.0, "2nd Floor"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_table(id: TableId) -> Table {
        Table {
            id,
            seats: 4,
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
            area: None,
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = TableCatalog::new(vec![bare_table(1), bare_table(1)]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn rejects_non_positive_ids_and_seats() {
        assert!(matches!(
            TableCatalog::new(vec![bare_table(0)]),
            Err(CatalogError::InvalidId(0))
        ));

        let mut table = bare_table(1);
        table.seats = 0;
        assert!(matches!(
            TableCatalog::new(vec![table]),
            Err(CatalogError::InvalidSeats { id: 1, seats: 0 })
        ));
    }

    #[test]
    fn default_floor_layout() {
        let catalog = TableCatalog::default_floor();
        assert_eq!(catalog.len(), 11);
        assert_eq!(
            catalog.areas(),
            vec!["Garden", "Fountain", "1st Floor", "2nd Floor"]
        );
        assert_eq!(catalog.filter_by_area(Some("Garden")).len(), 4);
        assert_eq!(catalog.filter_by_area(None).len(), 11);
    }

    #[test]
    fn filter_with_unknown_area_is_empty() {
        let catalog = TableCatalog::default_floor();
        assert!(catalog.filter_by_area(Some("Rooftop")).is_empty());
    }

    #[test]
    fn parses_catalog_json() {
        let json = r#"[
            { "id": 1, "seats": 4, "x": 10.0, "y": 20.0, "area": "Garden" },
            { "id": 2, "seats": 2, "x": 30.0, "y": 20.0 }
        ]"#;
        let catalog = TableCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().area.as_deref(), Some("Garden"));
        assert!(catalog.get(2).unwrap().area.is_none());
        assert_eq!(catalog.areas(), vec!["Garden"]);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            TableCatalog::from_json_str("not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
