//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. One
/// intent settles fully before the next is processed, so every reduce
/// call observes the committed result of the previous one.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Must be pure: no side effects, no I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
