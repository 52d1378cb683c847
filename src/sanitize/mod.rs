//! Key sanitization.
//!
//! Turns arbitrary human-entered strings into legal identifiers.
//!
//! # Rules
//!
//! | Step | Constant names | Class names |
//! |------|----------------|-------------|
//! | Letters and decimal digits | uppercased | kept as-is |
//! | Whitespace / illegal runs | collapsed to one `_` | removed |
//! | Boundary `_` | trimmed | kept |
//! | Digit-leading result | prefixed with `_` | prefixed with `_` |
//!
//! Other numerals (`½`, `²`, `①`) and combining marks count as illegal
//! characters, so the output always compiles in both C# and Rust.
//! | Nothing left | `None` | fallback name |
//!
//! All functions are pure and locale-independent.

use crate::models::Identifier;

/// Class name used when the source name has no legal characters.
pub const DEFAULT_CLASS_NAME: &str = "CsvConstants";

/// Sanitizes a raw key into a constant name.
///
/// Letters and digits are uppercased, every run of whitespace or other
/// characters becomes a single `_`, boundary separators are trimmed and a
/// digit-leading result gets a `_` prefix.
///
/// Returns `None` if nothing remains.
///
/// # Examples
///
/// ```rust
/// use csvconst::sanitize::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("foo bar").unwrap(), "FOO_BAR");
/// assert_eq!(sanitize_identifier("123abc").unwrap(), "_123ABC");
/// assert!(sanitize_identifier("   ").is_none());
/// ```
#[must_use]
pub fn sanitize_identifier(raw: &str) -> Option<Identifier> {
    let collapsed = collapse(raw, push_uppercase);
    if collapsed.is_empty() {
        return None;
    }
    Identifier::parse(prefix_if_needed(collapsed))
}

/// Applies the constant-name collapsing rule without changing case.
///
/// Only used to decide whether sanitization changed a key significantly.
#[must_use]
pub fn sanitize_for_comparison(raw: &str) -> String {
    collapse(raw, |c, out| out.push(c))
}

/// Returns whether turning `raw` into `identifier` was more than a case change.
///
/// Separator collapsing, boundary trimming, removal of illegal characters and
/// the digit prefix all count as significant.
#[must_use]
pub fn is_significant_change(raw: &str, identifier: &Identifier) -> bool {
    let comparison = sanitize_for_comparison(raw);
    if comparison != raw {
        return true;
    }
    let mut expected = String::with_capacity(comparison.len());
    for c in comparison.chars() {
        if Identifier::is_word_char(c) {
            push_uppercase(c, &mut expected);
        } else {
            expected.push(c);
        }
    }
    identifier.as_str() != expected
}

/// Sanitizes a name for use as a class (or type) name.
///
/// Every character that is not a letter, digit or `_` is dropped, case is
/// kept and a digit-leading result gets a `_` prefix. Falls back to
/// `fallback` when nothing remains.
#[must_use]
pub fn sanitize_class_name(raw: &str, fallback: &Identifier) -> Identifier {
    let kept: String = raw
        .chars()
        .filter(|&c| c == Identifier::SEPARATOR || Identifier::is_word_char(c))
        .collect();
    if kept.is_empty() {
        return fallback.clone();
    }
    Identifier::parse(prefix_if_needed(kept)).unwrap_or_else(|| fallback.clone())
}

/// Returns [`DEFAULT_CLASS_NAME`] as an identifier.
#[must_use]
pub fn default_class_name() -> Identifier {
    Identifier::parse(DEFAULT_CLASS_NAME).unwrap_or_else(|| unreachable!())
}

/// Maps letters and digits with `keep` and collapses everything else into single
/// separators, then trims boundary separators.
fn collapse(raw: &str, keep: impl Fn(char, &mut String)) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_was_separator = false;

    for c in raw.chars() {
        if Identifier::is_word_char(c) {
            keep(c, &mut out);
            prev_was_separator = false;
        } else if !prev_was_separator {
            out.push(Identifier::SEPARATOR);
            prev_was_separator = true;
        }
    }

    out.trim_matches(Identifier::SEPARATOR).to_string()
}

/// Pushes the uppercase form of `c`, keeping only letters and digits.
///
/// Some letters expand into combining marks when uppercased; those marks are
/// dropped so the result stays a legal identifier.
fn push_uppercase(c: char, out: &mut String) {
    let before = out.len();
    out.extend(c.to_uppercase().filter(|&u| Identifier::is_word_char(u)));
    if out.len() == before {
        out.push(c);
    }
}

/// Prefixes `_` unless `s` starts with a letter or `_`.
fn prefix_if_needed(mut s: String) -> String {
    if s
        .chars()
        .next()
        .is_some_and(|c| c != Identifier::SEPARATOR && !Identifier::is_start_char(c))
    {
        s.insert(0, Identifier::SEPARATOR);
    }
    s
}
