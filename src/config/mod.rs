#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::domain::model::NameOrder;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Effective settings after merging command-line flags over the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub order: NameOrder,
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: NameOrder::FirstLast,
            format: OutputFormat::Text,
            verbose: false,
            log_level: None,
            log_format: LogFormat::Compact,
        }
    }
}

/// Flags that can override file configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub order: Option<NameOrder>,
    pub format: Option<OutputFormat>,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(overrides: &Overrides, file: Option<&TomlConfig>) -> Result<Self> {
        if let Some(file) = file {
            file.validate()?;
        }

        let defaults = Settings::default();
        let log_format = match file.and_then(TomlConfig::log_format) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Ok(Self {
            order: overrides
                .order
                .or_else(|| file.and_then(TomlConfig::order))
                .unwrap_or(defaults.order),
            format: overrides
                .format
                .or_else(|| file.and_then(TomlConfig::output_format))
                .unwrap_or(defaults.format),
            verbose: overrides.verbose,
            log_level: file.and_then(TomlConfig::log_level).map(str::to_string),
            log_format,
        })
    }
}
