//! Model-View-Intent (MVI) primitives shared by the components.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Widget
//!    ↑                              │
//!    └──────── user input ──────────┘
//! ```
//!
//! - **State**: everything a widget needs to draw itself
//! - **Intent**: an input event or timer firing, already interpreted
//! - **Reducer**: the only place a component's state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
