//! Typed configuration for a date field.

use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use crate::date::{has_date_token, DEFAULT_DISPLAY_FORMAT};

/// Default quiet period before typed text is parsed.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(600);

/// Errors raised while building [`DateFieldProps`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropsError {
    #[error("Date field requires a non-empty name")]
    MissingName,

    #[error("Display format '{format}' has no year, month or day token")]
    InvalidDisplayFormat { format: String },
}

/// Initial value supplied by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialValue {
    Date(NaiveDate),
    /// ISO-like text, parsed once at construction.
    Text(String),
}

impl From<NaiveDate> for InitialValue {
    fn from(date: NaiveDate) -> Self {
        InitialValue::Date(date)
    }
}

impl From<&str> for InitialValue {
    fn from(text: &str) -> Self {
        InitialValue::Text(text.to_string())
    }
}

impl From<String> for InitialValue {
    fn from(text: String) -> Self {
        InitialValue::Text(text)
    }
}

/// Validated date-field options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFieldProps {
    pub name: String,
    pub id: Option<String>,
    pub value: Option<InitialValue>,
    pub with_default_value: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub display_format: String,
    pub tab_index: i32,
    pub wait: Duration,
}

impl DateFieldProps {
    pub fn builder() -> DateFieldPropsBuilder {
        DateFieldPropsBuilder::default()
    }

    /// Identifier shown on the text box; falls back to `name`.
    pub fn input_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DateFieldPropsBuilder {
    name: Option<String>,
    id: Option<String>,
    value: Option<InitialValue>,
    with_default_value: bool,
    disabled: bool,
    read_only: bool,
    display_format: Option<String>,
    tab_index: i32,
    wait: Option<Duration>,
}

impl DateFieldPropsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(mut self, value: impl Into<InitialValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn maybe_value(mut self, value: Option<InitialValue>) -> Self {
        self.value = value;
        self
    }

    pub fn with_default_value(mut self, enabled: bool) -> Self {
        self.with_default_value = enabled;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn display_format(mut self, format: impl Into<String>) -> Self {
        self.display_format = Some(format.into());
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    pub fn build(self) -> Result<DateFieldProps, PropsError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(PropsError::MissingName)?;

        let display_format = self
            .display_format
            .unwrap_or_else(|| DEFAULT_DISPLAY_FORMAT.to_string());
        if !has_date_token(&display_format) {
            return Err(PropsError::InvalidDisplayFormat {
                format: display_format,
            });
        }

        Ok(DateFieldProps {
            name,
            id: self.id.filter(|id| !id.is_empty()),
            value: self.value,
            with_default_value: self.with_default_value,
            disabled: self.disabled,
            read_only: self.read_only,
            display_format,
            tab_index: self.tab_index,
            wait: self.wait.unwrap_or(DEFAULT_WAIT),
        })
    }
}
