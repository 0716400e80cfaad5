//! Intents for the date field.

use chrono::NaiveDate;

use crate::ui::mvi::Intent;

/// Interpreted events the date-field reducer applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFieldIntent {
    /// Text box content changed to `text`.
    TextChanged { text: String },

    /// Text box clicked: show the popover.
    Open,

    /// Hide the popover without touching the committed value.
    Close,

    /// Accept `date`; `text` is its canonical rendering.
    Commit { date: NaiveDate, text: String },
}

impl Intent for DateFieldIntent {}
