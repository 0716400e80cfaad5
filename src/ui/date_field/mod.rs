//! Date-picker input: a text box plus a calendar popover.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - committed date, raw text, popover and editing flags
//! - `intent.rs` - interpreted events (TextChanged, Open, Close, Commit)
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `controller.rs` - input routing, validation, debounce, owner callback
//! - `widget.rs` - ratatui rendering and hit-test layout

mod controller;
mod debounce;
mod event;
mod intent;
mod props;
mod reducer;
mod state;
mod widget;

pub use controller::{ChangeHandler, DateField, DateFieldLayout, KeyDisposition};
pub use debounce::Debounce;
pub use event::{ChangeEvent, ChangeTarget, ValueKind};
pub use intent::DateFieldIntent;
pub use props::{DateFieldProps, DateFieldPropsBuilder, InitialValue, PropsError, DEFAULT_WAIT};
pub use reducer::DateFieldReducer;
pub use state::DateFieldState;
pub use widget::INPUT_HEIGHT;
