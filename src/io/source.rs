//! CSV key column source.
//!
//! Only the first column is read. There is no quoting or escaping support: a
//! delimiter inside a key always splits it.

use crate::{Error, Result};
use std::iter::Enumerate;
use std::path::Path;
use std::str::Lines;

const BOM: char = '\u{feff}';

/// A data row's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow {
    /// 1-based physical line number (blank lines are counted).
    pub line: usize,
    /// Column one, trimmed of surrounding whitespace.
    pub raw: String,
}

/// Iterates over the key column of CSV text.
///
/// Whitespace-only lines are skipped and the first remaining line is treated
/// as the header.
pub struct KeySource<'a> {
    lines: Enumerate<Lines<'a>>,
    delimiter: char,
    header_seen: bool,
}

impl<'a> KeySource<'a> {
    /// Creates a source over `text`, splitting rows on `delimiter`.
    #[must_use]
    pub fn new(text: &'a str, delimiter: char) -> Self {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        Self {
            lines: text.lines().enumerate(),
            delimiter,
            header_seen: false,
        }
    }
}

impl Iterator for KeySource<'_> {
    type Item = KeyRow;

    fn next(&mut self) -> Option<KeyRow> {
        for (index, line) in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            if !self.header_seen {
                self.header_seen = true;
                continue;
            }
            let raw = line.split(self.delimiter).next().unwrap_or_default().trim();
            return Some(KeyRow {
                line: index + 1,
                raw: raw.to_string(),
            });
        }
        None
    }
}

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
        operation: "read_csv".to_string(),
        cause: format!("{}: {e}", path.display()),
    })
}

/// Parses a delimiter setting.
///
/// Accepts a single character, or `tab` / `\t` for a tab.
///
/// # Errors
///
/// Returns an error if the value is empty or longer than one character.
pub fn parse_delimiter(s: &str) -> Result<char> {
    if matches!(s, "tab" | "\\t") {
        return Ok('\t');
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidInput(format!(
            "delimiter must be a single character, got '{s}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<(usize, String)> {
        KeySource::new(text, ',')
            .map(|row| (row.line, row.raw))
            .collect()
    }

    #[test]
    fn test_skips_header() {
        let text = "Key,English\nhello,Hello\nbye,Goodbye\n";
        assert_eq!(
            rows(text),
            vec![(2, "hello".to_string()), (3, "bye".to_string())]
        );
    }

    #[test]
    fn test_blank_lines_counted_but_skipped() {
        let text = "\n  \nKey,Value\n\nfirst,1\n\t\nsecond,2";
        assert_eq!(
            rows(text),
            vec![(5, "first".to_string()), (7, "second".to_string())]
        );
    }

    #[test]
    fn test_empty_key_is_yielded() {
        let text = "Key,Value\n ,orphan\n";
        assert_eq!(rows(text), vec![(2, String::new())]);
    }

    #[test]
    fn test_crlf_and_bom() {
        let text = "\u{feff}Key,Value\r\nstart game,Start\r\n";
        assert_eq!(rows(text), vec![(2, "start game".to_string())]);
    }

    #[test]
    fn test_no_quoting_support() {
        let text = "Key\n\"a,b\",x\n";
        assert_eq!(rows(text), vec![(2, "\"a".to_string())]);
    }

    #[test]
    fn test_custom_delimiter() {
        let rows: Vec<_> = KeySource::new("Key;Value\na,b;c\n", ';').collect();
        assert_eq!(rows[0].raw, "a,b");
    }

    #[test]
    fn test_header_only() {
        assert!(rows("Key,Value\n").is_empty());
        assert!(rows("").is_empty());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), ',');
        assert_eq!(parse_delimiter(";").unwrap(), ';');
        assert_eq!(parse_delimiter("tab").unwrap(), '\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), '\t');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(",,").is_err());
    }
}
