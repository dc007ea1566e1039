use sweetstand::catalog::{CatalogEntry, CatalogStore, ImageSet, StepAction};
use sweetstand::mvi::Reducer;
use sweetstand::session::{SessionError, SessionIntent, SessionReducer, SessionState};

fn entry(id: &str, price: f64) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: format!("{id} dessert"),
        category: "Test".to_string(),
        price,
        image: ImageSet {
            thumbnail: format!("{id}-thumb.jpg"),
            mobile: String::new(),
            tablet: String::new(),
            desktop: String::new(),
        },
    }
}

fn session() -> SessionState {
    SessionState::new(CatalogStore::new(vec![
        entry("waffle", 4.0),
        entry("baklava", 4.0),
    ]))
}

fn step(state: SessionState, id: &str, action: StepAction) -> SessionState {
    SessionReducer::reduce(
        state,
        SessionIntent::AddOrUpdate {
            item: Some(id.to_string()),
            action,
        },
    )
}

fn increment(state: SessionState, id: &str) -> SessionState {
    step(state, id, StepAction::Increment)
}

fn decrement(state: SessionState, id: &str) -> SessionState {
    step(state, id, StepAction::Decrement)
}

// -- the core add/update scenario -------------------------------------------

#[test]
fn increment_twice_then_decrement_twice() {
    // Two increments on a 4.00 item, then two decrements: the line grows
    // to quantity 2 and total 8.00, shrinks to 1 and 4.00, and finally
    // disappears entirely with the catalog item back at zero.
    let state = session();

    let state = increment(state, "waffle");
    let state = increment(state, "waffle");
    assert_eq!(state.cart.lines()[0].quantity, 2);
    assert!((state.cart.total() - 8.0).abs() < 1e-9);

    let state = decrement(state, "waffle");
    assert_eq!(state.cart.lines()[0].quantity, 1);
    assert!((state.cart.total() - 4.0).abs() < 1e-9);

    let state = decrement(state, "waffle");
    assert!(state.cart.is_empty());
    assert_eq!(state.cart.total(), 0.0);
    assert_eq!(state.catalog.get("waffle").unwrap().quantity, 0);
}

#[test]
fn cart_line_mirrors_catalog_quantity() {
    // Whenever quantity > 0 the line matches the item; at 0 the line is
    // absent rather than retained at zero.
    let mut state = session();
    let actions = [
        StepAction::Increment,
        StepAction::Increment,
        StepAction::Decrement,
        StepAction::Increment,
        StepAction::Decrement,
        StepAction::Decrement,
    ];

    for action in actions {
        state = step(state, "waffle", action);
        let quantity = state.catalog.get("waffle").unwrap().quantity;
        let line = state.cart.lines().iter().find(|l| l.id == "waffle");
        if quantity > 0 {
            assert_eq!(line.expect("line present").quantity, quantity);
        } else {
            assert!(line.is_none());
        }
    }
}

#[test]
fn rapid_intents_settle_in_order() {
    // Two intents issued back-to-back each apply against the settled
    // result of the previous one.
    let state = increment(increment(session(), "waffle"), "waffle");
    assert_eq!(state.catalog.get("waffle").unwrap().quantity, 2);
    assert_eq!(state.cart.lines()[0].quantity, 2);
}

#[test]
fn decrement_with_no_line_is_defensive_noop() {
    let state = decrement(session(), "waffle");
    assert!(state.cart.is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.catalog.get("waffle").unwrap().quantity, 0);
}

// -- invalid operations ------------------------------------------------------

#[test]
fn missing_item_sets_error_and_changes_nothing() {
    let before = increment(session(), "waffle");
    let after = SessionReducer::reduce(
        before.clone(),
        SessionIntent::AddOrUpdate {
            item: None,
            action: StepAction::Increment,
        },
    );

    assert_eq!(after.error, Some(SessionError::InvalidOperation));
    assert_eq!(after.catalog, before.catalog);
    assert_eq!(after.cart, before.cart);
}

#[test]
fn unknown_id_sets_error_and_changes_nothing() {
    let before = session();
    let after = increment(before.clone(), "croissant");

    assert_eq!(after.error, Some(SessionError::InvalidOperation));
    assert_eq!(after.catalog, before.catalog);
    assert_eq!(after.cart, before.cart);
}

// -- removal -----------------------------------------------------------------

#[test]
fn remove_drops_line_and_resets_item() {
    let state = increment(increment(session(), "waffle"), "waffle");
    let state = SessionReducer::reduce(
        state,
        SessionIntent::Remove {
            id: "waffle".to_string(),
        },
    );

    assert!(state.cart.is_empty());
    let item = state.catalog.get("waffle").unwrap();
    assert_eq!(item.quantity, 0);
    assert!(!item.show_stepper);
    assert!(!item.active);
}

#[test]
fn remove_twice_matches_remove_once() {
    let state = increment(session(), "waffle");
    let once = SessionReducer::reduce(
        state,
        SessionIntent::Remove {
            id: "waffle".to_string(),
        },
    );
    let twice = SessionReducer::reduce(
        once.clone(),
        SessionIntent::Remove {
            id: "waffle".to_string(),
        },
    );
    assert_eq!(once, twice);
}

#[test]
fn remove_unknown_id_is_silent() {
    let state = SessionReducer::reduce(
        session(),
        SessionIntent::Remove {
            id: "croissant".to_string(),
        },
    );
    assert!(state.error.is_none());
    assert!(state.cart.is_empty());
}

#[test]
fn remove_leaves_other_lines_untouched() {
    let state = increment(increment(session(), "waffle"), "baklava");
    let state = SessionReducer::reduce(
        state,
        SessionIntent::Remove {
            id: "waffle".to_string(),
        },
    );
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart.lines()[0].id, "baklava");
}

// -- confirmation ------------------------------------------------------------

#[test]
fn confirm_on_empty_cart_stays_false() {
    let state = SessionReducer::reduce(session(), SessionIntent::ConfirmOrder);
    assert!(!state.confirmed);
    assert!(state.error.is_none());
}

#[test]
fn confirm_with_lines_sets_flag() {
    let state = increment(session(), "waffle");
    let state = SessionReducer::reduce(state, SessionIntent::ConfirmOrder);
    assert!(state.confirmed);
    assert_eq!(state.cart.len(), 1, "confirming keeps the cart intact");
}

// -- new order ---------------------------------------------------------------

#[test]
fn new_order_resets_the_whole_session() {
    let state = increment(increment(session(), "waffle"), "baklava");
    let mut state = SessionReducer::reduce(state, SessionIntent::ConfirmOrder);
    state.error = Some(SessionError::UpdateFailure);

    let state = SessionReducer::reduce(state, SessionIntent::StartNewOrder);

    assert!(state.cart.is_empty());
    assert_eq!(state.cart.total(), 0.0);
    assert!(!state.confirmed);
    assert!(state.error.is_none());
    for item in state.catalog.items() {
        assert_eq!(item.quantity, 0);
        assert!(!item.show_stepper);
        assert!(!item.active);
    }
}
