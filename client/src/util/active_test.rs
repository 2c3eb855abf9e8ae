use super::*;
use std::cell::Cell;

#[test]
fn new_flag_is_active_and_commits() {
    let flag = ActiveFlag::new();
    let ran = Cell::new(false);
    assert!(flag.commit(|| ran.set(true)));
    assert!(ran.get());
}

#[test]
fn deactivated_flag_drops_late_results() {
    let flag = ActiveFlag::new();
    let clone = flag.clone();
    flag.deactivate();
    let ran = Cell::new(false);
    assert!(!clone.commit(|| ran.set(true)));
    assert!(!ran.get());
}

#[test]
fn renewing_slot_retires_previous_request() {
    let slot = ActiveSlot::new();
    let first = slot.renew();
    let second = slot.renew();

    let ran = Cell::new(0);
    assert!(!first.commit(|| ran.set(1)));
    assert!(second.commit(|| ran.set(2)));
    assert_eq!(ran.get(), 2);
}

#[test]
fn deactivating_slot_retires_current_request() {
    let slot = ActiveSlot::new();
    let current = slot.renew();
    slot.deactivate();
    assert!(!current.is_active());
}
