//! Date field controller: owns the state and mediates between the text box,
//! the calendar popover, the debounced parse and the owner.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::date::{DateCodec, MomentCodec, CANONICAL_PATTERN};
use crate::ui::calendar::{CalendarOutcome, CalendarPopover};
use crate::ui::mvi::Reducer;
use crate::ui::text_input::{InputOutcome, TextInput};

use super::debounce::Debounce;
use super::event::ChangeEvent;
use super::intent::DateFieldIntent;
use super::props::{DateFieldProps, InitialValue};
use super::reducer::DateFieldReducer;
use super::state::DateFieldState;

/// Owner callback invoked on every commit.
pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent) + Send>;

/// How the field treated a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Handled by the field.
    Consumed,
    /// Tab: the popover was dismissed; the owner should move focus.
    Dismissed,
    /// Not for this field.
    Ignored,
}

/// Screen rectangles from the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFieldLayout {
    pub input: Rect,
    pub popover: Option<Rect>,
}

pub struct DateField {
    props: DateFieldProps,
    state: DateFieldState,
    codec: Box<dyn DateCodec>,
    debounce: Debounce<()>,
    input: TextInput,
    calendar: CalendarPopover,
    on_change: Option<ChangeHandler>,
    focused: bool,
    layout: DateFieldLayout,
}

impl DateField {
    pub fn new(props: DateFieldProps) -> Self {
        Self::with_codec(props, Box::new(MomentCodec))
    }

    pub fn with_codec(props: DateFieldProps, codec: Box<dyn DateCodec>) -> Self {
        Self::mount(props, codec, Local::now().date_naive())
    }

    fn mount(props: DateFieldProps, codec: Box<dyn DateCodec>, today: NaiveDate) -> Self {
        let committed_date = initial_date(&props, codec.as_ref(), today);
        let display_text = committed_date
            .map(|date| codec.format(date, CANONICAL_PATTERN))
            .unwrap_or_default();
        tracing::trace!(
            name = %props.name,
            committed = ?committed_date,
            "date field mounted"
        );

        Self {
            debounce: Debounce::new(props.wait),
            state: DateFieldState::new(committed_date, display_text),
            calendar: CalendarPopover::new(today),
            input: TextInput::new(),
            on_change: None,
            focused: false,
            layout: DateFieldLayout::default(),
            codec,
            props,
        }
    }

    /// Set the owner callback.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn props(&self) -> &DateFieldProps {
        &self.props
    }

    pub fn name(&self) -> &str {
        &self.props.name
    }

    pub fn state(&self) -> &DateFieldState {
        &self.state
    }

    pub fn committed_date(&self) -> Option<NaiveDate> {
        self.state.committed_date
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn calendar(&self) -> &CalendarPopover {
        &self.calendar
    }

    pub fn layout(&self) -> DateFieldLayout {
        self.layout
    }

    pub(crate) fn set_layout(&mut self, layout: DateFieldLayout) {
        self.layout = layout;
    }

    pub(crate) fn input_cursor(&self) -> usize {
        let shown = self.displayed_text();
        if self.input.value() == shown {
            self.input.cursor()
        } else {
            shown.chars().count()
        }
    }

    /// Text the box shows right now.
    ///
    /// Raw input while the popover is open, otherwise the committed date in
    /// the display format.
    pub fn displayed_text(&self) -> String {
        if self.state.popover_open {
            return self.state.display_text.clone();
        }
        self.state
            .committed_date
            .map(|date| self.codec.format(date, &self.props.display_format))
            .unwrap_or_default()
    }

    /// When the pending parse is due, for owners that sleep between events.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Text box content changed. Restarts the debounced parse.
    pub fn on_text_change(&mut self, text: impl Into<String>, now: Instant) {
        if self.props.disabled || self.props.read_only {
            return;
        }
        if self.debounce.schedule(now, ()).is_some() {
            tracing::trace!(name = %self.props.name, "pending parse replaced");
        }
        self.dispatch(DateFieldIntent::TextChanged { text: text.into() });
    }

    /// Fire the pending parse when due. Returns true when it committed.
    ///
    /// The text box content at firing time is what gets parsed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.debounce.fire(now).is_none() {
            return false;
        }
        let text = self.state.display_text.clone();
        match self.codec.parse(&text, CANONICAL_PATTERN) {
            Some(date) => self.commit(date),
            None => {
                tracing::debug!(name = %self.props.name, %text, "typed text is not a date");
                false
            }
        }
    }

    /// Accept `date` and notify the owner. Invalid dates are ignored.
    pub fn commit(&mut self, date: NaiveDate) -> bool {
        if !self.codec.is_valid(date) {
            tracing::debug!(name = %self.props.name, %date, "rejected invalid date");
            return false;
        }

        let text = self.codec.format(date, CANONICAL_PATTERN);
        self.dispatch(DateFieldIntent::Commit { date, text });

        let event = ChangeEvent::date(self.props.name.clone(), date);
        tracing::info!(name = %self.props.name, %date, "date committed");
        if let Some(handler) = self.on_change.as_mut() {
            handler(&event);
        }
        true
    }

    /// Text box clicked.
    pub fn open(&mut self) -> bool {
        if self.props.disabled {
            return false;
        }
        if !self.state.popover_open {
            self.calendar
                .reset(self.state.committed_date, Local::now().date_naive());
        }
        self.dispatch(DateFieldIntent::Open);
        true
    }

    /// Day picked in the popover: commit, then close.
    ///
    /// A pending parse of typed text is dropped; the picked day wins.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        self.debounce.cancel();
        let committed = self.commit(date);
        self.dispatch(DateFieldIntent::Close);
        committed
    }

    /// Outside click or Tab: close without committing.
    ///
    /// Returns whether the popover was open.
    pub fn dismiss(&mut self) -> bool {
        let was_open = self.state.popover_open;
        self.dispatch(DateFieldIntent::Close);
        was_open
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyDisposition {
        if key.kind == KeyEventKind::Release || self.props.disabled {
            return KeyDisposition::Ignored;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.dismiss();
            return KeyDisposition::Dismissed;
        }

        if self.state.popover_open {
            if let Some(disposition) = self.handle_calendar_key(key) {
                return disposition;
            }
        } else if key.code == KeyCode::Enter {
            self.open();
            return KeyDisposition::Consumed;
        }

        let edits = TextInput::is_edit_key(&key);
        if self.props.read_only && edits {
            return KeyDisposition::Ignored;
        }
        // Closed fields show the display format; edit the raw text instead.
        if edits && !self.state.popover_open {
            self.open();
        }

        self.input.sync(&self.displayed_text());
        match self.input.handle_key(key) {
            InputOutcome::Changed => {
                let text = self.input.value().to_string();
                self.on_text_change(text, now);
                KeyDisposition::Consumed
            }
            InputOutcome::Moved => KeyDisposition::Consumed,
            InputOutcome::Ignored => KeyDisposition::Ignored,
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) -> Option<KeyDisposition> {
        let routed = matches!(
            key.code,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Enter
                | KeyCode::Esc
        );
        if !routed {
            return None;
        }

        let disposition = match self.calendar.handle_key(key) {
            CalendarOutcome::Selected(date) => {
                self.select_day(date);
                KeyDisposition::Consumed
            }
            CalendarOutcome::Dismissed => {
                self.dismiss();
                KeyDisposition::Consumed
            }
            CalendarOutcome::Moved => KeyDisposition::Consumed,
            CalendarOutcome::Ignored => KeyDisposition::Ignored,
        };
        Some(disposition)
    }

    /// Left-button presses against the last rendered layout.
    ///
    /// Returns true when the click concerned this field.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if self.props.disabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if self.state.popover_open {
            if let Some(area) = self.layout.popover.filter(|area| area.contains(pos)) {
                if let Some(date) = self.calendar.click(area, pos) {
                    self.select_day(date);
                }
                return true;
            }
            if self.layout.input.contains(pos) {
                return self.open();
            }
            self.dismiss();
            return true;
        }

        if self.layout.input.contains(pos) {
            return self.open();
        }
        false
    }

    /// Tear the field down, releasing any pending parse.
    ///
    /// Returns whether a parse was still pending.
    pub fn unmount(mut self) -> bool {
        let pending = self.debounce.cancel().is_some();
        if pending {
            tracing::debug!(name = %self.props.name, "pending parse cancelled on unmount");
        }
        pending
    }

    fn dispatch(&mut self, intent: DateFieldIntent) {
        tracing::trace!(name = %self.props.name, ?intent, "date field intent");
        let state = std::mem::take(&mut self.state);
        self.state = DateFieldReducer::reduce(state, intent);
    }
}

fn initial_date(props: &DateFieldProps, codec: &dyn DateCodec, today: NaiveDate) -> Option<NaiveDate> {
    let value = props.value.as_ref().filter(|value| match value {
        InitialValue::Text(text) => !text.trim().is_empty(),
        InitialValue::Date(_) => true,
    });

    let Some(value) = value else {
        return props.with_default_value.then_some(today);
    };

    let parsed = match value {
        InitialValue::Date(date) => Some(*date).filter(|date| codec.is_valid(*date)),
        InitialValue::Text(text) => codec.parse_initial(text),
    };
    if parsed.is_none() {
        tracing::debug!(name = %props.name, ?value, "ignoring invalid initial value");
    }
    parsed
}
