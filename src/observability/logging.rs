//! Structured logging configuration.

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Overrides the filter directive.
pub const LOG_FILTER_ENV: &str = "CSVCONST_LOG";
/// Overrides the log format.
pub const LOG_FORMAT_ENV: &str = "CSVCONST_LOG_FORMAT";
/// Overrides the log file.
pub const LOG_FILE_ENV: &str = "CSVCONST_LOG_FILE";

const DEFAULT_FILTER: &str = "info";
const VERBOSE_FILTER: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// Multi-line human-readable output with span context.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!("Unknown log format: {s}"))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
    /// Log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from config settings with env overrides.
    ///
    /// `verbose` raises the default level to `debug`; an explicit filter in
    /// the settings or the environment still wins.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let mut config = Self::from_settings_only(settings, verbose);
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config
    }

    fn from_settings_only(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let default_filter = if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        };
        let filter = settings
            .and_then(|s| s.filter.clone())
            .unwrap_or_else(|| default_filter.to_string());
        let format = settings
            .and_then(|s| s.format.as_deref())
            .and_then(parse_format)
            .unwrap_or_default();
        let file = settings.and_then(|s| s.file.clone());

        Self {
            filter,
            format,
            file,
        }
    }
}

/// Applies environment overrides using `lookup` to read variables.
fn apply_env_overrides(config: &mut LoggingConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
        config.filter = filter;
    }

    if let Some(format) = lookup(LOG_FORMAT_ENV).and_then(|v| parse_format(&v)) {
        config.format = format;
    }

    if let Some(file) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
        config.file = Some(PathBuf::from(file));
    }
}

/// Unknown values fall back to the default format.
fn parse_format(value: &str) -> Option<LogFormat> {
    value.parse().ok()
}
