use sweetstand::catalog::{CatalogEntry, CatalogStore, ImageSet, StepAction, StoreError};

fn entry(id: &str, price: f64) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: format!("{id} dessert"),
        category: "Test".to_string(),
        price,
        image: ImageSet {
            thumbnail: format!("{id}-thumb.jpg"),
            mobile: format!("{id}-mobile.jpg"),
            tablet: format!("{id}-tablet.jpg"),
            desktop: format!("{id}-desktop.jpg"),
        },
    }
}

fn store() -> CatalogStore {
    CatalogStore::new(vec![entry("waffle", 6.5), entry("tiramisu", 5.5)])
}

// -- stepping ---------------------------------------------------------------

#[test]
fn increment_from_zero_marks_item() {
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();

    let item = store.get("waffle").unwrap();
    assert_eq!(item.quantity, 1);
    assert!(item.show_stepper);
    assert!(item.active);
}

#[test]
fn step_returns_the_stepped_entry() {
    let mut store = store();
    let entry = store.step("tiramisu", StepAction::Increment).unwrap();
    assert_eq!(entry.id, "tiramisu");
    assert_eq!(entry.price, 5.5);
}

#[test]
fn decrement_clamps_at_zero() {
    let mut store = store();
    store.step("waffle", StepAction::Decrement).unwrap();
    assert_eq!(store.get("waffle").unwrap().quantity, 0);
}

#[test]
fn quantity_never_negative_over_any_sequence() {
    let mut store = store();
    let sequence = [
        StepAction::Decrement,
        StepAction::Increment,
        StepAction::Decrement,
        StepAction::Decrement,
        StepAction::Decrement,
        StepAction::Increment,
    ];
    for action in sequence {
        store.step("waffle", action).unwrap();
        let quantity = store.get("waffle").unwrap().quantity;
        assert!(quantity <= 2, "quantity stayed in range, got {quantity}");
    }
    assert_eq!(store.get("waffle").unwrap().quantity, 1);
}

#[test]
fn stepper_flag_latches_across_decrements() {
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("waffle", StepAction::Decrement).unwrap();
    assert!(store.get("waffle").unwrap().show_stepper);
}

// -- active highlight boundary ----------------------------------------------

#[test]
fn decrement_from_two_keeps_highlight() {
    // The highlight is computed against the pre-step quantity: stepping
    // 2→1 leaves the item highlighted until the next intent touches it.
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("waffle", StepAction::Decrement).unwrap();

    let item = store.get("waffle").unwrap();
    assert_eq!(item.quantity, 1);
    assert!(item.active);
}

#[test]
fn decrement_from_one_drops_highlight() {
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("waffle", StepAction::Decrement).unwrap();

    let item = store.get("waffle").unwrap();
    assert_eq!(item.quantity, 0);
    assert!(!item.active);
}

// -- error paths ------------------------------------------------------------

#[test]
fn unknown_id_is_rejected_without_mutation() {
    let mut store = store();
    let before = store.clone();
    let err = store.step("croissant", StepAction::Increment).unwrap_err();
    assert!(matches!(err, StoreError::UnknownItem { .. }));
    assert_eq!(store, before);
}

#[test]
fn reset_unknown_id_is_rejected() {
    let mut store = store();
    assert!(matches!(
        store.reset("croissant"),
        Err(StoreError::UnknownItem { .. })
    ));
}

// -- reset ------------------------------------------------------------------

#[test]
fn reset_restores_baseline() {
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("waffle", StepAction::Increment).unwrap();
    store.reset("waffle").unwrap();

    let item = store.get("waffle").unwrap();
    assert_eq!(item.quantity, 0);
    assert!(!item.show_stepper);
    assert!(!item.active);
}

#[test]
fn reset_all_restores_every_item() {
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("tiramisu", StepAction::Increment).unwrap();
    store.reset_all();

    for item in store.items() {
        assert_eq!(item.quantity, 0);
        assert!(!item.show_stepper);
        assert!(!item.active);
    }
}

#[test]
fn reset_leaves_other_items_alone() {
    let mut store = store();
    store.step("waffle", StepAction::Increment).unwrap();
    store.step("tiramisu", StepAction::Increment).unwrap();
    store.reset("waffle").unwrap();

    assert_eq!(store.get("waffle").unwrap().quantity, 0);
    assert_eq!(store.get("tiramisu").unwrap().quantity, 1);
}
