use super::*;
use crate::models::Table;

mod test_core;

fn table(id: TableId, seats: i32, area: Option<&str>) -> Table {
    Table {
        id,
        seats,
        x: 0.0,
        y: 0.0,
        width: None,
        height: None,
        area: area.map(str::to_string),
    }
}

/// Catalog from the two-table scenario: T1(seats=4), T2(seats=2)
fn two_table_catalog() -> TableCatalog {
    TableCatalog::new(vec![table(1, 4, None), table(2, 2, None)]).unwrap()
}

/// Catalog with 3 "Garden" tables and 2 "Fountain" tables
fn garden_fountain_catalog() -> TableCatalog {
    TableCatalog::new(vec![
        table(1, 4, Some("Garden")),
        table(2, 4, Some("Garden")),
        table(3, 2, Some("Garden")),
        table(4, 6, Some("Fountain")),
        table(5, 8, Some("Fountain")),
    ])
    .unwrap()
}

/// Manager over two opaque slots "S1", "S2"
fn two_slot_manager() -> FloorManager {
    FloorManager::new(
        two_table_catalog(),
        TimeSlots::new(vec!["S1".to_string(), "S2".to_string()]),
    )
}
