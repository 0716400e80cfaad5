//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Turns a state and an intent into the next state.
///
/// Reducers stay pure. Formatting, timers and owner callbacks run in the
/// component around the `reduce` call, never inside it.
pub trait Reducer {
    /// State this reducer produces.
    type State: UiState;

    /// Intents this reducer understands.
    type Intent: Intent;

    /// Apply `intent` to `state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
