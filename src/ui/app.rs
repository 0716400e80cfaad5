use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use parking_lot::Mutex;

use crate::config::{Config, ConfigError};
use crate::ui::date_field::{ChangeEvent, DateField, KeyDisposition};

/// Change events kept for the on-screen log.
const CHANGE_LOG_LIMIT: usize = 50;

pub type ChangeLog = Arc<Mutex<Vec<ChangeEvent>>>;

/// Demo owner: a subtitle, a column of date fields and a change log.
pub struct App {
    should_quit: bool,
    subtitle: String,
    fields: Vec<DateField>,
    focus: usize,
    changes: ChangeLog,
}

impl App {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let changes: ChangeLog = Arc::new(Mutex::new(Vec::new()));

        let mut fields = config
            .date_fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let props = field.to_props().map_err(|source| ConfigError::InvalidField {
                    index,
                    name: field.name.clone(),
                    source,
                })?;
                let sink = Arc::clone(&changes);
                Ok(DateField::new(props).on_change(move |event| record_change(&sink, event)))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        // Focus order follows tab_index, then declaration order.
        fields.sort_by_key(|field| field.props().tab_index);
        let focus = fields
            .iter()
            .position(|field| !field.props().disabled)
            .unwrap_or(0);

        let mut app = Self {
            should_quit: false,
            subtitle: config.subtitle.clone(),
            fields,
            focus,
            changes,
        };
        app.set_focus(focus);
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn fields(&self) -> &[DateField] {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut [DateField] {
        &mut self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn changes(&self) -> Vec<ChangeEvent> {
        self.changes.lock().clone()
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.request_quit();
            return;
        }

        let disposition = match self.fields.get_mut(self.focus) {
            Some(field) => field.handle_key(key, now),
            None => KeyDisposition::Ignored,
        };

        let moves_focus = disposition == KeyDisposition::Dismissed
            || (disposition == KeyDisposition::Ignored
                && matches!(key.code, KeyCode::Tab | KeyCode::BackTab));
        if moves_focus {
            let forward = key.code == KeyCode::Tab;
            self.move_focus(forward);
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);

        // An open popover covers the fields below it, so it sees the click first.
        if let Some(index) = self.fields.iter().position(DateField::is_open) {
            let field = &mut self.fields[index];
            let layout = field.layout();
            let own = layout.input.contains(pos)
                || layout.popover.is_some_and(|area| area.contains(pos));
            field.handle_mouse(mouse);
            if own {
                self.set_focus(index);
                return;
            }
        }

        let mut clicked = None;
        for (index, field) in self.fields.iter_mut().enumerate() {
            if field.handle_mouse(mouse) && field.is_open() {
                clicked = Some(index);
            }
        }
        if let Some(index) = clicked {
            self.set_focus(index);
        }
    }

    /// Fire any due debounced parses.
    pub fn on_tick(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.on_tick(now);
        }
    }

    /// Earliest pending parse across all fields.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.fields.iter().filter_map(DateField::next_deadline).min()
    }

    /// Release every field, cancelling pending parses.
    ///
    /// Returns how many parses were still pending.
    pub fn shutdown(&mut self) -> usize {
        let cancelled = self
            .fields
            .drain(..)
            .map(DateField::unmount)
            .filter(|&pending| pending)
            .count();
        if cancelled > 0 {
            tracing::debug!(cancelled, "pending parses dropped on shutdown");
        }
        cancelled
    }

    fn move_focus(&mut self, forward: bool) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len();
        let mut next = self.focus;
        // Skip disabled fields, giving up after one full lap.
        for _ in 0..len {
            next = if forward {
                (next + 1) % len
            } else {
                (next + len - 1) % len
            };
            if !self.fields[next].props().disabled {
                break;
            }
        }
        self.set_focus(next);
    }

    fn set_focus(&mut self, index: usize) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == index);
        }
        self.focus = index;
    }
}

fn record_change(log: &ChangeLog, event: &ChangeEvent) {
    match serde_json::to_string(event) {
        Ok(json) => tracing::info!(target: "buffet_tui::changes", %json, "change event"),
        Err(err) => tracing::warn!(%err, "failed to serialise change event"),
    }
    let mut log = log.lock();
    log.push(event.clone());
    if log.len() > CHANGE_LOG_LIMIT {
        let overflow = log.len() - CHANGE_LOG_LIMIT;
        log.drain(..overflow);
    }
}
