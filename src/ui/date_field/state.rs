use chrono::NaiveDate;

use crate::ui::mvi::UiState;

/// Interaction state of one date field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateFieldState {
    /// Last accepted value, or the initial one.
    pub committed_date: Option<NaiveDate>,
    /// Literal text-box content. Diverges from `committed_date` while typing.
    pub display_text: String,
    /// Whether the calendar popover is rendered.
    pub popover_open: bool,
    /// Whether the user is interacting with the popover.
    pub is_editing: bool,
}

impl UiState for DateFieldState {}

impl DateFieldState {
    pub fn new(committed_date: Option<NaiveDate>, display_text: String) -> Self {
        Self {
            committed_date,
            display_text,
            popover_open: false,
            is_editing: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.popover_open
    }
}
