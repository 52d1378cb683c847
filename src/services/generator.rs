//! Constant generation service.
//!
//! Feeds key rows through the sanitizer, keeps identifiers unique, and
//! collects constants and problem records for one run.

use crate::io::{KeyRow, KeySource};
use crate::models::{Constant, Identifier, ProblemReason, ProblemRecord, Severity};
use crate::rendering::{ConstantsRenderer, Language};
use crate::sanitize::{
    default_class_name, is_significant_change, sanitize_class_name, sanitize_identifier,
};
use std::collections::HashMap;
use std::path::Path;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Name the class is derived from, usually the CSV file stem.
    pub source_name: String,
    /// Appended to `source_name` before class-name sanitization.
    pub suffix: String,
    /// Output language.
    pub language: Language,
    /// Class name used when `source_name + suffix` has no legal characters.
    pub fallback_class_name: Identifier,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            source_name: String::new(),
            suffix: String::new(),
            language: Language::default(),
            fallback_class_name: default_class_name(),
        }
    }
}

impl GenerateRequest {
    /// Creates a request for the given source name.
    #[must_use]
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }

    /// Creates a request named after a CSV file's stem.
    #[must_use]
    pub fn for_path(csv_path: &Path) -> Self {
        let stem = csv_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(stem)
    }

    /// Sets the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the output language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the fallback class name.
    #[must_use]
    pub fn with_fallback_class_name(mut self, name: Identifier) -> Self {
        self.fallback_class_name = name;
        self
    }
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The class (or type) name used in the generated source.
    pub class_name: Identifier,
    /// Constants in input order.
    pub constants: Vec<Constant>,
    /// Problem records in input order.
    pub problems: Vec<ProblemRecord>,
    /// Number of data rows read.
    pub rows: usize,
    /// Rendered source text.
    pub content: String,
}

impl GenerateResult {
    /// Returns the number of rows that were skipped.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of constants emitted with a warning.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns whether any row was skipped.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.problems
            .iter()
            .filter(|p| p.severity() == severity)
            .count()
    }
}

/// Service for generating constants from key rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorService;

impl GeneratorService {
    /// Creates a new generator service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates constants from CSV text.
    #[must_use]
    pub fn generate_from_text(
        &self,
        request: &GenerateRequest,
        text: &str,
        delimiter: char,
    ) -> GenerateResult {
        self.generate(request, KeySource::new(text, delimiter))
    }

    /// Generates constants from key rows.
    ///
    /// Empty and unsanitizable keys are skipped. Keys changed by sanitization
    /// and keys whose identifier is already taken are still emitted. Every
    /// case is recorded as a problem.
    #[must_use]
    pub fn generate(
        &self,
        request: &GenerateRequest,
        rows: impl IntoIterator<Item = KeyRow>,
    ) -> GenerateResult {
        let renderer = request.language.renderer();
        let class_name = class_name_for(request, renderer.as_ref());
        let class_name_taken = renderer.forbids_member_named_like_type();

        let mut constants = Vec::new();
        let mut problems = Vec::new();
        let mut taken: HashMap<Identifier, usize> = HashMap::new();
        let mut row_count = 0;

        for row in rows {
            row_count += 1;

            if row.raw.is_empty() {
                record(&mut problems, row.line, &row.raw, ProblemReason::EmptyKey);
                continue;
            }

            let Some(base) = sanitize_identifier(&row.raw) else {
                record(&mut problems, row.line, &row.raw, ProblemReason::Unsanitizable);
                continue;
            };

            if is_significant_change(&row.raw, &base) {
                record(
                    &mut problems,
                    row.line,
                    &row.raw,
                    ProblemReason::Renamed {
                        identifier: base.clone(),
                    },
                );
            }

            let identifier = match taken.get(&base) {
                None if class_name_taken && base == class_name => {
                    let emitted = next_free(&base, &taken);
                    record(
                        &mut problems,
                        row.line,
                        &row.raw,
                        ProblemReason::ClassNameClash {
                            emitted: emitted.clone(),
                        },
                    );
                    emitted
                },
                None => base,
                Some(&first_line) => {
                    let emitted = next_free(&base, &taken);
                    record(
                        &mut problems,
                        row.line,
                        &row.raw,
                        ProblemReason::Duplicate {
                            base,
                            emitted: emitted.clone(),
                            first_line,
                        },
                    );
                    emitted
                },
            };

            taken.insert(identifier.clone(), row.line);
            constants.push(Constant::new(row.line, identifier, row.raw));
        }

        let content = renderer.render(&class_name, &constants);

        tracing::info!(
            class = %class_name,
            language = %request.language,
            rows = row_count,
            constants = constants.len(),
            problems = problems.len(),
            "Generated constants"
        );

        GenerateResult {
            class_name,
            constants,
            problems,
            rows: row_count,
            content,
        }
    }
}

/// Derives the class name, prefixing reserved words with `_`.
fn class_name_for(request: &GenerateRequest, renderer: &dyn ConstantsRenderer) -> Identifier {
    let raw = format!("{}{}", request.source_name, request.suffix);
    let name = sanitize_class_name(&raw, &request.fallback_class_name);
    if !renderer.is_reserved(name.as_str()) {
        return name;
    }
    tracing::debug!(class = %name, "Class name is a reserved word, prefixing");
    Identifier::parse(format!("{}{name}", Identifier::SEPARATOR))
        .unwrap_or_else(|| request.fallback_class_name.clone())
}

/// Returns the first `<base>_<n>` (n >= 2) not yet taken.
fn next_free(base: &Identifier, taken: &HashMap<Identifier, usize>) -> Identifier {
    (2..)
        .map(|n| base.with_ordinal(n))
        .find(|candidate| !taken.contains_key(candidate))
        .unwrap_or_else(|| unreachable!())
}

fn record(problems: &mut Vec<ProblemRecord>, line: usize, key: &str, reason: ProblemReason) {
    match reason.severity() {
        Severity::Error => {
            tracing::warn!(line, key, %reason, "Skipped key");
        },
        Severity::Warning => {
            tracing::info!(line, key, %reason, "Key needs attention");
        },
    }
    problems.push(ProblemRecord::new(line, key, reason));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(text: &str) -> GenerateResult {
        GeneratorService::new().generate_from_text(&GenerateRequest::new("Keys"), text, ',')
    }

    fn identifiers(result: &GenerateResult) -> Vec<&str> {
        result
            .constants
            .iter()
            .map(|c| c.identifier.as_str())
            .collect()
    }

    #[test]
    fn test_clean_keys_have_no_problems() {
        let result = generate("Key,English\nSTART_GAME,Start\nquit,Quit\n");
        assert_eq!(identifiers(&result), vec!["START_GAME", "QUIT"]);
        assert!(result.problems.is_empty());
        assert_eq!(result.rows, 2);
        assert_eq!(result.constants[1].value, "quit");
    }

    #[test]
    fn test_empty_key_skipped() {
        let result = generate("Key,English\n,Orphan\nok,Ok\n");
        assert_eq!(identifiers(&result), vec!["OK"]);
        assert_eq!(
            result.problems,
            vec![ProblemRecord::new(2, "", ProblemReason::EmptyKey)]
        );
        assert!(result.has_errors());
    }

    #[test]
    fn test_unsanitizable_key_skipped() {
        let result = generate("Key\n!!!\n");
        assert!(result.constants.is_empty());
        assert_eq!(result.problems[0].reason, ProblemReason::Unsanitizable);
        assert_eq!(result.problems[0].key, "!!!");
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_renamed_key_emitted_with_warning() {
        let result = generate("Key\nmain menu / title\n");
        assert_eq!(identifiers(&result), vec!["MAIN_MENU_TITLE"]);
        assert_eq!(result.constants[0].value, "main menu / title");
        assert_eq!(result.warning_count(), 1);
        assert!(!result.has_errors());
        assert!(matches!(
            &result.problems[0].reason,
            ProblemReason::Renamed { identifier } if identifier == "MAIN_MENU_TITLE"
        ));
    }

    #[test]
    fn test_duplicates_get_unique_names() {
        let result = generate("Key\nfoo bar\nFOO_BAR\nfoo-bar\nFOO_BAR_2\n");
        assert_eq!(
            identifiers(&result),
            vec!["FOO_BAR", "FOO_BAR_2", "FOO_BAR_3", "FOO_BAR_2_2"]
        );

        let duplicate = result
            .problems
            .iter()
            .find(|p| p.line == 3)
            .unwrap();
        assert_eq!(
            duplicate.reason,
            ProblemReason::Duplicate {
                base: Identifier::parse("FOO_BAR").unwrap(),
                emitted: Identifier::parse("FOO_BAR_2").unwrap(),
                first_line: 2,
            }
        );
    }

    #[test]
    fn test_constant_named_like_class_is_renamed_in_csharp() {
        let request = GenerateRequest::new("IDS");
        let result =
            GeneratorService::new().generate_from_text(&request, "Key\nids\nIds\nother\n", ',');

        assert_eq!(result.class_name, "IDS");
        assert_eq!(identifiers(&result), vec!["IDS_2", "IDS_3", "OTHER"]);
        assert_eq!(
            result.problems[0],
            ProblemRecord::new(
                2,
                "ids",
                ProblemReason::ClassNameClash {
                    emitted: Identifier::parse("IDS_2").unwrap(),
                }
            )
        );
        assert!(matches!(
            result.problems[1].reason,
            ProblemReason::ClassNameClash { .. }
        ));
        assert!(!result.has_errors());
        assert!(!result.content.contains("const string IDS ="));
    }

    #[test]
    fn test_constant_named_like_type_is_kept_in_rust() {
        let request = GenerateRequest::new("IDS").with_language(Language::Rust);
        let result = GeneratorService::new().generate_from_text(&request, "Key\nids\n", ',');
        assert_eq!(identifiers(&result), vec!["IDS"]);
        assert!(result.problems.is_empty());
    }

    #[test]
    fn test_line_numbers_are_physical() {
        let result = generate("\nKey\n\n\nhello world\n");
        assert_eq!(result.constants[0].line, 5);
        assert_eq!(result.problems[0].line, 5);
    }

    #[test]
    fn test_class_name_from_source_and_suffix() {
        let request = GenerateRequest::new("ui strings").with_suffix("-Keys");
        let result = GeneratorService::new().generate_from_text(&request, "Key\n", ',');
        assert_eq!(result.class_name, "uistringsKeys");
        assert!(result.content.contains("public static class uistringsKeys"));
    }

    #[test]
    fn test_class_name_fallback_and_reserved() {
        let result =
            GeneratorService::new().generate_from_text(&GenerateRequest::new("---"), "", ',');
        assert_eq!(result.class_name, "CsvConstants");

        let request = GenerateRequest::new("type").with_language(Language::Rust);
        let result = GeneratorService::new().generate_from_text(&request, "", ',');
        assert_eq!(result.class_name, "_type");
    }

    #[test]
    fn test_for_path_uses_stem() {
        let request = GenerateRequest::for_path(Path::new("Assets/Data/Localization.csv"));
        assert_eq!(request.source_name, "Localization");
    }

    #[test]
    fn test_rust_output() {
        let request = GenerateRequest::new("Keys").with_language(Language::Rust);
        let result = GeneratorService::new().generate_from_text(&request, "Key\nhi\n", ',');
        assert!(
            result
                .content
                .contains("    pub const HI: &'static str = \"hi\";\n")
        );
    }
}
