//! Unidirectional data-flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every mutation of browse state goes through one pure transition
//! function. Key handlers and fetch settlements produce intents; the view
//! tree renders from the resulting state. Nothing reaches into state from
//! the side.

/// Marker trait for state objects: immutable snapshots holding everything
/// the view needs, comparable so the runtime can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions (key presses) and system events
/// (fetch settlements).
pub trait Intent: Send + 'static {}

/// The single place where state transitions happen. `reduce` must be pure:
/// `(State, Intent) -> State`, no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
