//! Command-line flags for the demo binary.
//!
//! Flags override the config file; the per-field flags apply to the first
//! `[[date_fields]]` entry only.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DateFieldConfig};

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "buffet-demo", version, about = "Date field and list subtitle demo")]
pub struct Cli {
    /// Config file (default: <config dir>/buffet-tui/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name of the first field
    #[arg(long)]
    pub name: Option<String>,

    /// Initial value of the first field (ISO date or MM/DD/YYYY)
    #[arg(long)]
    pub value: Option<String>,

    /// Display pattern of the first field, e.g. "YYYY-MM-DD"
    #[arg(long, value_name = "PATTERN")]
    pub display_format: Option<String>,

    /// Debounce delay for typed text, in milliseconds
    #[arg(long, value_name = "MS")]
    pub wait_ms: Option<u64>,

    /// Start the first field at today when it has no value
    #[arg(long)]
    pub with_default_value: bool,

    #[arg(long)]
    pub read_only: bool,

    #[arg(long)]
    pub disabled: bool,

    /// Append logs here instead of the configured file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the flags into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if !self.touches_field() {
            return;
        }
        if config.date_fields.is_empty() {
            config
                .date_fields
                .push(DateFieldConfig::named(self.name.as_deref().unwrap_or("date")));
        }
        let field = &mut config.date_fields[0];
        if let Some(name) = &self.name {
            field.name = name.clone();
        }
        if let Some(value) = &self.value {
            field.value = Some(value.clone());
        }
        if let Some(format) = &self.display_format {
            field.display_format = format.clone();
        }
        if let Some(wait) = self.wait_ms {
            field.wait_ms = wait;
        }
        field.with_default_value |= self.with_default_value;
        field.read_only |= self.read_only;
        field.disabled |= self.disabled;
    }

    fn touches_field(&self) -> bool {
        self.name.is_some()
            || self.value.is_some()
            || self.display_format.is_some()
            || self.wait_ms.is_some()
            || self.with_default_value
            || self.read_only
            || self.disabled
    }
}
