pub mod app;
pub mod calendar;
pub mod date_field;
pub mod events;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod subtitle;
pub mod terminal_guard;
pub mod text_input;
pub mod theme;
