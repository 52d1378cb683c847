//! Configuration management.
//!
//! Configuration comes from a TOML file; command-line flags override it.
//!
//! ```toml
//! [generator]
//! language = "csharp"
//! suffix = "Keys"
//! out_dir = "Assets/Generated"
//! delimiter = ","
//! fallback_class_name = "CsvConstants"
//! report_format = "text"
//!
//! [logging]
//! format = "pretty"
//! filter = "info"
//! file = "/tmp/csvconst.log"
//! ```

use crate::io::{ReportFormat, parse_delimiter};
use crate::models::Identifier;
use crate::rendering::Language;
use crate::sanitize::{default_class_name, sanitize_class_name};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_PATH_ENV: &str = "CSVCONST_CONFIG_PATH";

/// Main configuration for csvconst.
#[derive(Debug, Clone, Default)]
pub struct CsvConstConfig {
    /// Generator defaults.
    pub generator: GeneratorSettings,
    /// Logging settings (overridable from the environment).
    pub logging: LoggingSettings,
    /// Config files that were loaded, in order.
    pub config_sources: Vec<PathBuf>,
}

/// Generator defaults.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Output language.
    pub language: Language,
    /// Appended to the CSV file stem for the output file and class name.
    pub suffix: String,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Column delimiter.
    pub delimiter: char,
    /// Class name used when the file name has no legal characters.
    pub fallback_class_name: Identifier,
    /// Problem report format.
    pub report_format: ReportFormat,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            suffix: String::new(),
            out_dir: PathBuf::from("."),
            delimiter: ',',
            fallback_class_name: default_class_name(),
            report_format: ReportFormat::default(),
        }
    }
}

/// Logging section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// `pretty` or `json`.
    pub format: Option<String>,
    /// Filter directive, e.g. `info` or `csvconst=debug`.
    pub filter: Option<String>,
    /// Log file path; logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Generator section.
    pub generator: Option<ConfigFileGenerator>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

/// Generator section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileGenerator {
    /// Output language.
    pub language: Option<String>,
    /// File name suffix.
    pub suffix: Option<String>,
    /// Output directory.
    pub out_dir: Option<String>,
    /// Column delimiter.
    pub delimiter: Option<String>,
    /// Fallback class name.
    pub fallback_class_name: Option<String>,
    /// Problem report format.
    pub report_format: Option<String>,
}

impl CsvConstConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration.
    ///
    /// Checks, in order: `path`, the `CSVCONST_CONFIG_PATH` environment
    /// variable, then the platform config directory. An explicitly named file
    /// must exist; the default location is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read or parsed,
    /// or if the default file exists but is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path);
        }

        if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
            if !config_path.trim().is_empty() {
                return Self::load_from_file(Path::new(&config_path));
            }
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => Self::load_from_file(&default_path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns `<platform config dir>/csvconst/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("csvconst").join("config.toml"))
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        let mut config = Self::from_toml(&contents)?;
        config.config_sources.push(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value is invalid.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;
        Self::from_config_file(file)
    }

    /// Converts a `ConfigFile` to `CsvConstConfig`.
    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(generator) = file.generator {
            let settings = &mut config.generator;
            if let Some(language) = generator.language {
                settings.language = language.parse()?;
            }
            if let Some(suffix) = generator.suffix {
                settings.suffix = suffix;
            }
            if let Some(out_dir) = generator.out_dir {
                settings.out_dir = PathBuf::from(out_dir);
            }
            if let Some(delimiter) = generator.delimiter {
                settings.delimiter = parse_delimiter(&delimiter)?;
            }
            if let Some(name) = generator.fallback_class_name {
                settings.fallback_class_name = sanitize_class_name(&name, &default_class_name());
            }
            if let Some(format) = generator.report_format {
                settings.report_format = format.parse()?;
            }
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        Ok(config)
    }
}
