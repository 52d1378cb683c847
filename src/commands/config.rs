//! Config command handler.
//!
//! Contains the implementation of the `config` CLI command and
//! display helpers for configuration output.

use csvconst::config::CsvConstConfig;
use csvconst::observability::LoggingConfig;

/// Config command.
pub fn cmd_config(config: &CsvConstConfig, show: bool) {
    if !show {
        println!("Use --show to display configuration");
        return;
    }

    println!("Current Configuration");
    println!("=====================");
    println!();

    // Show config file sources
    println!("Config Files Loaded:");
    if config.config_sources.is_empty() {
        println!("  (none - using defaults)");
    } else {
        for source in &config.config_sources {
            println!("  - {}", source.display());
        }
    }
    println!();

    let generator = &config.generator;
    println!("Generator:");
    println!("  Language: {}", generator.language);
    println!(
        "  Suffix: {}",
        if generator.suffix.is_empty() {
            "(none)"
        } else {
            generator.suffix.as_str()
        }
    );
    println!("  Output Directory: {}", generator.out_dir.display());
    println!("  Delimiter: {}", display_delimiter(generator.delimiter));
    println!("  Fallback Class Name: {}", generator.fallback_class_name);
    println!("  Report Format: {}", generator.report_format);
    println!();

    println!("Logging:");
    display_logging_config(config);
}

/// Helper to display the effective logging configuration.
fn display_logging_config(config: &CsvConstConfig) {
    let logging = LoggingConfig::from_settings(Some(&config.logging), false);
    println!("  Filter: {}", logging.filter);
    println!("  Format: {:?}", logging.format);
    match &logging.file {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  File: (stderr)"),
    }
}

fn display_delimiter(delimiter: char) -> String {
    match delimiter {
        '\t' => "tab".to_string(),
        c => format!("'{c}'"),
    }
}
