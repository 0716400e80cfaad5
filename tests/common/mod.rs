//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use buffet_tui::ui::date_field::{ChangeEvent, DateField, DateFieldProps, DateFieldPropsBuilder};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;

pub type Recorded = Arc<Mutex<Vec<ChangeEvent>>>;

pub const WAIT: Duration = Duration::from_millis(600);

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn props() -> DateFieldPropsBuilder {
    DateFieldProps::builder().name("start_date")
}

/// Build a field whose change events are collected into the returned vec.
pub fn recording_field(props: DateFieldProps) -> (DateField, Recorded) {
    let events: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let field = DateField::new(props).on_change(move |event| sink.lock().push(event.clone()));
    (field, events)
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn chars(text: &str) -> impl Iterator<Item = KeyEvent> + '_ {
    text.chars().map(|ch| press(KeyCode::Char(ch)))
}
