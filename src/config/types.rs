use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::date::DEFAULT_DISPLAY_FORMAT;
use crate::ui::date_field::{DateFieldProps, InitialValue, PropsError};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Subtitle shown above the fields.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Where log lines go; the TUI owns stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Date fields, in focus order.
    #[serde(default = "default_date_fields")]
    pub date_fields: Vec<DateFieldConfig>,
}

/// One `[[date_fields]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFieldConfig {
    /// Field name echoed in change events. Required.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    /// Initial value, ISO-like or `MM/DD/YYYY`.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub with_default_value: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "default_display_format")]
    pub display_format: String,
    #[serde(default)]
    pub tab_index: i32,
    /// Debounce delay for typed text, in milliseconds (default: 600).
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
}

fn default_subtitle() -> String {
    "Pick a date range".to_string()
}

fn default_display_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

fn default_wait_ms() -> u64 {
    600
}

fn default_date_fields() -> Vec<DateFieldConfig> {
    vec![
        DateFieldConfig {
            with_default_value: true,
            ..DateFieldConfig::named("start_date")
        },
        DateFieldConfig::named("end_date"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subtitle: default_subtitle(),
            log_file: None,
            date_fields: default_date_fields(),
        }
    }
}

impl DateFieldConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            value: None,
            with_default_value: false,
            disabled: false,
            read_only: false,
            display_format: default_display_format(),
            tab_index: 0,
            wait_ms: default_wait_ms(),
        }
    }

    /// Build validated component props from this table.
    pub fn to_props(&self) -> Result<DateFieldProps, PropsError> {
        let mut builder = DateFieldProps::builder()
            .name(self.name.clone())
            .maybe_value(self.value.clone().map(InitialValue::Text))
            .with_default_value(self.with_default_value)
            .disabled(self.disabled)
            .read_only(self.read_only)
            .display_format(self.display_format.clone())
            .tab_index(self.tab_index)
            .wait(Duration::from_millis(self.wait_ms));
        if let Some(id) = &self.id {
            builder = builder.id(id.clone());
        }
        builder.build()
    }
}
