//! Model-View-Intent (MVI) architecture primitives.
//!
//! The session core and the view dialogs both follow the same
//! unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: a self-contained snapshot of everything the view renders
//! - **Intent**: a user action to be applied against that snapshot
//! - **Reducer**: the pure function that turns (state, intent) into the
//!   next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
