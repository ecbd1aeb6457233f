//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ View
//!    ↑                        │
//!    └────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or host-driven prop changes
//! - **Reducer**: Pure function that computes the next state and the
//!   ordered side effects the owner must run

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::UiState;
