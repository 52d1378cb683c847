//! Source code rendering for generated constants.
//!
//! Each target language implements [`ConstantsRenderer`]:
//!
//! | Language | Extension | Declaration |
//! |----------|-----------|-------------|
//! | C# | `cs` | `public const string KEY = "value";` in a static class |
//! | Rust | `rs` | `pub const KEY: &'static str = "value";` in an `impl` block |

mod csharp;
mod rust;

pub use csharp::CSharpRenderer;
pub use rust::RustRenderer;

use crate::models::{Constant, Identifier};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// First header line of every generated file.
pub const GENERATED_HEADER: &str = "This file is auto-generated by csvconst.";

/// Second header line of every generated file.
pub const GENERATED_WARNING: &str =
    "Do not modify this file directly. Changes will be overwritten.";

/// Renders constants as source code for one target language.
pub trait ConstantsRenderer {
    /// Returns the language this renderer emits.
    fn language(&self) -> Language;

    /// Renders the complete file content.
    fn render(&self, class_name: &Identifier, constants: &[Constant]) -> String;

    /// Returns whether `name` is a reserved word that cannot name a type.
    fn is_reserved(&self, name: &str) -> bool;

    /// Returns whether a constant may not share its enclosing type's name.
    fn forbids_member_named_like_type(&self) -> bool {
        false
    }
}

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// C# static class with `const string` fields.
    #[default]
    CSharp,
    /// Rust unit struct with associated `&'static str` constants.
    Rust,
}

impl Language {
    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::CSharp, Self::Rust]
    }

    /// Returns the file extension (without dot).
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::CSharp => "cs",
            Self::Rust => "rs",
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CSharp => "csharp",
            Self::Rust => "rust",
        }
    }

    /// Creates the renderer for this language.
    #[must_use]
    pub fn renderer(&self) -> Box<dyn ConstantsRenderer> {
        match self {
            Self::CSharp => Box::new(CSharpRenderer),
            Self::Rust => Box::new(RustRenderer),
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Ok(Self::CSharp),
            "rust" | "rs" => Ok(Self::Rust),
            _ => Err(Error::InvalidInput(format!(
                "Unknown language: {s} (expected csharp or rust)"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escapes `value` for a double-quoted string literal.
///
/// Backslashes, double quotes and control characters are escaped; everything
/// else is emitted verbatim.
#[must_use]
pub fn escape_literal(value: &str, language: Language) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => match language {
                Language::CSharp => out.push_str(&format!("\\u{:04x}", u32::from(c))),
                Language::Rust => out.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            },
            c => out.push(c),
        }
    }
    out
}
