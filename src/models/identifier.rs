//! Legal source-code identifiers.

use std::fmt;
use unicode_ident::{is_xid_continue, is_xid_start};

/// A string that is valid as a constant or class name.
///
/// Invariant: non-empty, first character is a letter or `_`, every other
/// character is a letter, a decimal digit or `_`. Letters are `XID_Start`
/// characters; digits are numeric `XID_Continue` characters. Both C# and Rust
/// accept every such identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Separator used between words and for numeric-leading prefixes.
    pub const SEPARATOR: char = '_';

    /// Validates `candidate` and wraps it.
    ///
    /// Returns `None` if the candidate is not a legal identifier.
    #[must_use]
    pub fn parse(candidate: impl Into<String>) -> Option<Self> {
        let candidate = candidate.into();
        Self::is_legal(&candidate).then_some(Self(candidate))
    }

    /// Returns whether `s` is a legal identifier.
    #[must_use]
    pub fn is_legal(s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        (first == Self::SEPARATOR || is_xid_start(first))
            && chars.all(|c| c == Self::SEPARATOR || Self::is_word_char(c))
    }

    /// Returns whether `c` is a letter or a decimal digit.
    ///
    /// Numerals such as `½`, `²` or `①` and combining marks are not.
    #[must_use]
    pub fn is_word_char(c: char) -> bool {
        is_xid_start(c) || (c.is_numeric() && is_xid_continue(c))
    }

    /// Returns whether `c` may start an identifier without a `_` prefix.
    #[must_use]
    pub fn is_start_char(c: char) -> bool {
        is_xid_start(c)
    }

    /// Returns `<self>_<n>`, used to disambiguate repeated identifiers.
    #[must_use]
    pub fn with_ordinal(&self, n: usize) -> Self {
        Self(format!("{}{}{n}", self.0, Self::SEPARATOR))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
