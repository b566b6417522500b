//! Model-View-Intent primitives shared by the form components.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything that crosses containers (building a friend,
//! touching the registry) happens in `App`, which dispatches intents after.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
