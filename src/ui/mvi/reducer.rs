//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Result of reducing one intent: the next state plus the effects the owner
/// must run, in order, before the next frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    pub fn new(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }

    /// A transition that keeps `state` and produces no effects.
    pub fn unchanged(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent, Context) -> (State, Effects).
/// Effects are plain data; running them is the owner's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Read-only data the reducer consults (e.g. a panel registry).
    type Context: ?Sized;

    /// Side effects requested by a transition.
    type Effect;

    /// Error raised when the context cannot satisfy a lookup.
    type Error;

    /// Process an intent and return the next state with its effects.
    ///
    /// On error the caller keeps its current state.
    fn reduce(
        state: &Self::State,
        intent: Self::Intent,
        context: &Self::Context,
    ) -> Result<Transition<Self::State, Self::Effect>, Self::Error>;
}
