//! Reducer for the date field.

use crate::ui::mvi::Reducer;

use super::intent::DateFieldIntent;
use super::state::DateFieldState;

/// Pure state transitions for [`DateFieldState`].
///
/// Validation, formatting, debouncing and owner notification happen in
/// the controller before or after dispatch.
pub struct DateFieldReducer;

impl Reducer for DateFieldReducer {
    type State = DateFieldState;
    type Intent = DateFieldIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Typing hands interaction back to the text box.
            DateFieldIntent::TextChanged { text } => DateFieldState {
                display_text: text,
                is_editing: false,
                ..state
            },
            DateFieldIntent::Open => DateFieldState {
                popover_open: true,
                is_editing: true,
                ..state
            },
            DateFieldIntent::Close => DateFieldState {
                popover_open: false,
                is_editing: false,
                ..state
            },
            DateFieldIntent::Commit { date, text } => DateFieldState {
                committed_date: Some(date),
                display_text: text,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn text_changed_replaces_text_and_clears_editing() {
        let state = DateFieldState {
            popover_open: true,
            is_editing: true,
            ..DateFieldState::default()
        };
        let new = DateFieldReducer::reduce(
            state,
            DateFieldIntent::TextChanged {
                text: "03/1".to_string(),
            },
        );
        assert_eq!(new.display_text, "03/1");
        assert!(!new.is_editing);
        assert!(new.popover_open);
    }

    #[test]
    fn open_sets_both_flags() {
        let new = DateFieldReducer::reduce(DateFieldState::default(), DateFieldIntent::Open);
        assert!(new.popover_open);
        assert!(new.is_editing);
    }

    #[test]
    fn close_keeps_text_and_date() {
        let state = DateFieldState {
            committed_date: Some(march_15()),
            display_text: "garbage".to_string(),
            popover_open: true,
            is_editing: true,
        };
        let new = DateFieldReducer::reduce(state, DateFieldIntent::Close);
        assert!(!new.popover_open);
        assert!(!new.is_editing);
        assert_eq!(new.display_text, "garbage");
        assert_eq!(new.committed_date, Some(march_15()));
    }

    #[test]
    fn commit_sets_date_and_text_without_closing() {
        let state = DateFieldState {
            popover_open: true,
            is_editing: true,
            ..DateFieldState::default()
        };
        let new = DateFieldReducer::reduce(
            state,
            DateFieldIntent::Commit {
                date: march_15(),
                text: "03/15/2024".to_string(),
            },
        );
        assert_eq!(new.committed_date, Some(march_15()));
        assert_eq!(new.display_text, "03/15/2024");
        assert!(new.popover_open);
    }

    #[test]
    fn commit_same_date_is_idempotent() {
        let state = DateFieldState::new(Some(march_15()), "03/15/2024".to_string());
        let new = DateFieldReducer::reduce(
            state.clone(),
            DateFieldIntent::Commit {
                date: march_15(),
                text: "03/15/2024".to_string(),
            },
        );
        assert_eq!(new, state);
    }
}
