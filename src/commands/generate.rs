//! Generate command handler.

use std::process::ExitCode;

use csvconst::config::CsvConstConfig;
use csvconst::io::{ReportFormat, default_report_path, export_report, read_text, write_report};
use csvconst::{GenerateRequest, GeneratorService, Language, OutputPlan};

use super::{GenerateArgs, resolve_delimiter};

/// Generate command.
pub fn cmd_generate(
    config: &CsvConstConfig,
    args: GenerateArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let settings = &config.generator;

    let language = match args.language.as_deref() {
        Some(language) => language.parse::<Language>()?,
        None => settings.language,
    };
    let suffix = args.suffix.unwrap_or_else(|| settings.suffix.clone());
    let out_dir = args.out_dir.unwrap_or_else(|| settings.out_dir.clone());
    let delimiter = resolve_delimiter(args.delimiter.as_deref(), settings.delimiter)?;

    let text = read_text(&args.csv)?;
    let request = GenerateRequest::for_path(&args.csv)
        .with_suffix(suffix.clone())
        .with_language(language)
        .with_fallback_class_name(settings.fallback_class_name.clone());
    let result = GeneratorService::new().generate_from_text(&request, &text, delimiter);

    if args.dry_run {
        print!("{}", result.content);
    } else {
        let plan = OutputPlan::new(&args.csv, &out_dir, &suffix, language);
        plan.write(&result.content, args.force)?;
        eprintln!(
            "Wrote {} constants to {}",
            result.constants.len(),
            plan.path().display()
        );
    }

    if !result.problems.is_empty() {
        eprintln!(
            "{} problem keys ({} skipped, {} renamed or deduplicated):",
            result.problems.len(),
            result.error_count(),
            result.warning_count()
        );
        write_report(std::io::stderr().lock(), &result.problems, ReportFormat::Text)?;
    }

    let report_path = match args.problems {
        Some(path) => Some((path, None)),
        None if args.export_problems => Some((
            default_report_path(&args.csv, None, settings.report_format),
            Some(settings.report_format),
        )),
        None => None,
    };
    if let Some((path, format)) = report_path {
        if export_report(&path, &result.problems, format)? {
            eprintln!("Problem keys exported to {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
