//! Reducer for the session context.

use crate::catalog::StoreError;
use crate::mvi::Reducer;

use super::error::SessionError;
use super::intent::SessionIntent;
use super::state::SessionState;

/// Applies session intents.
///
/// Pure — the caller owns side effects (rendering, logging) around the
/// dispatch. Failed intents set the error signal and leave prior
/// committed state intact; consistency is checked before anything is
/// mutated, so no rollback is ever needed.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::AddOrUpdate { item, action } => {
                let Some(id) = item.filter(|id| !id.is_empty()) else {
                    state.error = Some(SessionError::InvalidOperation);
                    return state;
                };

                match state.catalog.step(&id, action) {
                    Ok(entry) => {
                        state.cart.merge_step(&entry, action);
                        state.error = None;
                    }
                    Err(StoreError::UnknownItem { .. }) => {
                        state.error = Some(SessionError::InvalidOperation);
                    }
                    Err(StoreError::Desync { .. }) => {
                        state.error = Some(SessionError::UpdateFailure);
                    }
                }
                state
            }

            SessionIntent::Remove { id } => {
                if id.is_empty() {
                    return state;
                }

                let line_exists = state.cart.contains(&id);
                let indexed = state.catalog.contains(&id);
                let resolvable = state.catalog.get(&id).is_some();

                // A cart line whose id the catalog cannot resolve would
                // leave half the state reset; refuse before mutating.
                if (line_exists && !indexed) || (indexed && !resolvable) {
                    state.error = Some(SessionError::RemovalFailure);
                    return state;
                }

                state.cart.remove_line(&id);
                if resolvable && state.catalog.reset(&id).is_err() {
                    state.error = Some(SessionError::RemovalFailure);
                    return state;
                }
                state.error = None;
                state
            }

            SessionIntent::ConfirmOrder => {
                // Cannot confirm an empty order; the intent is simply
                // ignored, no error is raised.
                if state.cart.is_empty() {
                    return state;
                }
                state.confirmed = true;
                state.error = None;
                state
            }

            SessionIntent::StartNewOrder => {
                state.cart.clear();
                state.catalog.reset_all();
                state.confirmed = false;
                state.error = None;
                state
            }

            SessionIntent::DismissError => {
                state.error = None;
                state
            }
        }
    }
}
