//! Check command handler.

use std::process::ExitCode;

use csvconst::config::CsvConstConfig;
use csvconst::io::{ReportFormat, read_text, write_report};
use csvconst::{GenerateRequest, GeneratorService};

use super::{CheckArgs, resolve_delimiter};

/// Check command.
///
/// Exits with failure if any key would be skipped.
pub fn cmd_check(
    config: &CsvConstConfig,
    args: CheckArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let settings = &config.generator;
    let delimiter = resolve_delimiter(args.delimiter.as_deref(), settings.delimiter)?;

    let text = read_text(&args.csv)?;
    let request = GenerateRequest::for_path(&args.csv)
        .with_language(settings.language)
        .with_fallback_class_name(settings.fallback_class_name.clone());
    let result = GeneratorService::new().generate_from_text(&request, &text, delimiter);

    if result.problems.is_empty() {
        println!("{} keys, no problems found", result.rows);
        return Ok(ExitCode::SUCCESS);
    }

    write_report(std::io::stdout().lock(), &result.problems, ReportFormat::Text)?;
    println!();
    println!(
        "{} keys: {} skipped, {} renamed or deduplicated",
        result.rows,
        result.error_count(),
        result.warning_count()
    );

    if result.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
