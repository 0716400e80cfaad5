//! Terminal UI components: a styled list subtitle and a date-picker field
//! with a calendar popover and debounced free-text parsing.

pub mod args;
pub mod config;
pub mod date;
pub mod logging;
pub mod ui;

pub use date::{DateCodec, MomentCodec, CANONICAL_PATTERN, DEFAULT_DISPLAY_FORMAT};
pub use ui::date_field::{ChangeEvent, DateField, DateFieldProps, KeyDisposition, PropsError};
pub use ui::subtitle::ListSubtitle;
