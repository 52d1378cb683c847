//! Property-based tests for key sanitization and generation.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Sanitization is idempotent on its own output
//! - Keys with a letter or digit always yield an identifier
//! - Every produced identifier is legal
//! - Emitted identifiers are unique within one run
//! - Line numbers point at the physical input line

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use csvconst::sanitize::{sanitize_class_name, sanitize_identifier};
use csvconst::{GenerateRequest, GeneratorService, Identifier};
use proptest::prelude::*;
use std::collections::HashSet;

/// Mixes letters with numerals and combining marks that identifiers reject.
const TRICKY_KEY: &str = "[a-zA-Z0-9 ½²①\u{93e}\u{301}٣-]{0,20}";

/// Identifier rule shared by C# and Rust, checked without the crate's own
/// predicate: `_` or `XID_Start` first, `XID_Continue` after, and no
/// non-decimal numerals.
fn compiles_as_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || unicode_ident::is_xid_start(first))
        && chars.all(unicode_ident::is_xid_continue)
        && !s.contains(['½', '²', '①'])
}

fn generate(keys: &[String]) -> (String, csvconst::GenerateResult) {
    let mut text = String::from("Key,Value\n");
    for key in keys {
        text.push_str(key);
        text.push_str(",x\n");
    }
    let result =
        GeneratorService::new().generate_from_text(&GenerateRequest::new("Keys"), &text, ',');
    (text, result)
}

proptest! {
    /// Property: sanitizing a sanitized identifier returns it unchanged.
    #[test]
    fn prop_sanitize_idempotent(s in "[a-zA-Z0-9 _./!-]{0,40}") {
        if let Some(id) = sanitize_identifier(&s) {
            let again = sanitize_identifier(id.as_str());
            prop_assert_eq!(again, Some(id));
        }
    }

    /// Property: any key containing a letter or digit yields an identifier.
    #[test]
    fn prop_alphanumeric_never_none(s in "\\PC{0,30}") {
        prop_assume!(s.chars().any(Identifier::is_word_char));
        prop_assert!(sanitize_identifier(&s).is_some());
    }

    /// Property: keys without letters or digits yield nothing.
    #[test]
    fn prop_no_alphanumeric_is_none(s in "[ _./!@#$%^&*()-]{0,30}") {
        prop_assert!(sanitize_identifier(&s).is_none());
    }

    /// Property: every identifier produced compiles as a C# and Rust name.
    #[test]
    fn prop_output_is_legal(s in "\\PC{0,30}") {
        if let Some(id) = sanitize_identifier(&s) {
            prop_assert!(compiles_as_identifier(id.as_str()), "{:?} -> {}", s, id);
            prop_assert!(!id.as_str().contains("__"));
        }
    }

    /// Property: numerals and combining marks never reach an identifier.
    #[test]
    fn prop_tricky_output_is_legal(s in TRICKY_KEY) {
        if let Some(id) = sanitize_identifier(&s) {
            prop_assert!(compiles_as_identifier(id.as_str()), "{:?} -> {}", s, id);
            prop_assert!(!id.as_str().contains(['\u{93e}', '\u{301}']), "{:?} -> {}", s, id);
        }
    }

    /// Property: class names always compile as C# and Rust names.
    #[test]
    fn prop_class_name_is_legal(s in prop_oneof!["\\PC{0,30}", TRICKY_KEY]) {
        let fallback = Identifier::parse("Fallback").unwrap();
        let name = sanitize_class_name(&s, &fallback);
        prop_assert!(compiles_as_identifier(name.as_str()), "{:?} -> {}", s, name);
    }

    /// Property: emitted identifiers are unique within one run.
    #[test]
    fn prop_identifiers_unique(keys in prop::collection::vec("[a-zA-Z0-9 _-]{0,8}", 0..40)) {
        let (_, result) = generate(&keys);
        let mut seen = HashSet::new();
        for constant in &result.constants {
            prop_assert!(
                seen.insert(constant.identifier.clone()),
                "duplicate identifier {}",
                constant.identifier
            );
        }
    }

    /// Property: every data row ends up as a constant or a problem.
    #[test]
    fn prop_rows_accounted_for(keys in prop::collection::vec("[a-zA-Z0-9 _!-]{1,8}", 0..40)) {
        let (_, result) = generate(&keys);
        let skipped = result.error_count();
        prop_assert_eq!(result.constants.len() + skipped, result.rows);
    }

    /// Property: a constant's line points at the row holding its value.
    #[test]
    fn prop_lines_are_physical(keys in prop::collection::vec("[a-z ]{0,6}", 0..20)) {
        let (text, result) = generate(&keys);
        let lines: Vec<&str> = text.lines().collect();
        for constant in &result.constants {
            let line = lines[constant.line - 1];
            let key = line.split(',').next().unwrap().trim();
            prop_assert_eq!(key, constant.value.as_str());
        }
    }
}
