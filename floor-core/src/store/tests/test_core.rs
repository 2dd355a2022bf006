use super::*;


#[test]
fn fresh_manager_has_everything_available() {
    let manager = two_slot_manager();

    for slot in 0..2 {
        assert!(manager.bookings_for_slot(slot).is_empty());
    }

    let snapshot = manager.snapshot();
    assert_eq!(snapshot.stats.total, 2);
    assert_eq!(snapshot.stats.booked, 0);
    assert_eq!(snapshot.stats.available, 2);
}


#[test]
fn toggle_books_only_the_current_slot() {
    let mut manager = two_slot_manager();

    // Toggle T1 in S1
    let snapshot = manager.apply(FloorIntent::ToggleTable { table_id: 1 });

    assert_eq!(snapshot.bookings.get(&1), Some(&true));
    assert_eq!(snapshot.stats.total, 2);
    assert_eq!(snapshot.stats.booked, 1);
    assert_eq!(snapshot.stats.available, 1);

    // S2 is untouched: T1 still available there
    assert!(manager.bookings_for_slot(1).is_empty());
    let s2 = manager.apply(FloorIntent::NextSlot);
    assert!(s2.bookings.is_empty());
    assert_eq!(s2.stats.booked, 0);
}


#[test]
fn double_toggle_restores_prior_state() {
    let mut manager = two_slot_manager();

    manager.apply(FloorIntent::ToggleTable { table_id: 2 });
    let snapshot = manager.apply(FloorIntent::ToggleTable { table_id: 2 });

    assert!(!snapshot.bookings.get(&2).copied().unwrap_or(false));
    assert_eq!(snapshot.stats.booked, 0);
    assert_eq!(snapshot.stats.available, 2);
}


#[test]
fn toggle_accepts_unknown_table_id() {
    let mut manager = two_slot_manager();

    // id 42 is not in the catalog; the store takes the write anyway
    let snapshot = manager.apply(FloorIntent::ToggleTable { table_id: 42 });

    assert_eq!(snapshot.bookings.get(&42), Some(&true));
    // statistics only count catalog tables
    assert_eq!(snapshot.stats.total, 2);
    assert_eq!(snapshot.stats.booked, 0);
}


#[test]
fn toggle_emits_change_event() {
    let mut manager = two_slot_manager();
    let mut events = manager.subscribe();

    manager.apply(FloorIntent::ToggleTable { table_id: 1 });

    let event = events.try_recv().unwrap();
    assert_eq!(
        event,
        FloorEvent::TableToggled {
            slot_index: 0,
            table_id: 1,
            booked: true,
        }
    );
}


#[test]
fn snapshot_stats_always_match_a_fresh_recompute() {
    let mut manager = two_slot_manager();

    for table_id in [1, 2, 1, 42, 2] {
        let snapshot = manager.apply(FloorIntent::ToggleTable { table_id });
        let expected = TableStats::compute(snapshot.tables.iter(), &snapshot.bookings);
        assert_eq!(snapshot.stats, expected);
    }
}


#[test]
fn bookings_survive_slot_navigation() {
    let mut manager = two_slot_manager();

    manager.apply(FloorIntent::ToggleTable { table_id: 1 });
    manager.apply(FloorIntent::NextSlot);
    manager.apply(FloorIntent::ToggleTable { table_id: 2 });
    let snapshot = manager.apply(FloorIntent::PreviousSlot);

    // back at S1, the original booking is still there
    assert_eq!(snapshot.slot_index, 0);
    assert_eq!(snapshot.bookings.get(&1), Some(&true));
    assert_eq!(snapshot.bookings.get(&2), None);
}
