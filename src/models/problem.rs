//! Problem records for keys that need attention.

use super::Identifier;
use std::fmt;

/// Severity of a problem record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The constant was still emitted.
    Warning,
    /// The row was skipped.
    Error,
}

impl Severity {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a key was recorded as a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemReason {
    /// Column one was empty after trimming.
    EmptyKey,
    /// Nothing legal remained after sanitization.
    Unsanitizable,
    /// The key was materially changed by sanitization.
    Renamed {
        /// The identifier that was emitted.
        identifier: Identifier,
    },
    /// The sanitized identifier was already taken by an earlier row.
    Duplicate {
        /// The identifier the key sanitized to.
        base: Identifier,
        /// The disambiguated identifier that was emitted.
        emitted: Identifier,
        /// Line of the row that first produced `base`.
        first_line: usize,
    },
    /// The sanitized identifier equals the class name, which the target
    /// language does not allow for a member.
    ClassNameClash {
        /// The disambiguated identifier that was emitted.
        emitted: Identifier,
    },
}

impl ProblemReason {
    /// Returns the severity of this reason.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyKey | Self::Unsanitizable => Severity::Error,
            Self::Renamed { .. } | Self::Duplicate { .. } | Self::ClassNameClash { .. } => {
                Severity::Warning
            },
        }
    }
}

impl fmt::Display for ProblemReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => f.write_str("key is empty"),
            Self::Unsanitizable => f.write_str("cannot be turned into a legal identifier"),
            Self::Renamed { identifier } => write!(f, "sanitized to '{identifier}'"),
            Self::Duplicate {
                base,
                emitted,
                first_line,
            } => write!(
                f,
                "collides with '{base}' from line {first_line}, emitted as '{emitted}'"
            ),
            Self::ClassNameClash { emitted } => {
                write!(f, "matches the class name, emitted as '{emitted}'")
            },
        }
    }
}

/// A diagnostic entry for a key requiring attention during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRecord {
    /// 1-based physical line of the row in the input.
    pub line: usize,
    /// The trimmed raw key.
    pub key: String,
    /// What went wrong.
    pub reason: ProblemReason,
}

impl ProblemRecord {
    /// Creates a problem record.
    #[must_use]
    pub fn new(line: usize, key: impl Into<String>, reason: ProblemReason) -> Self {
        Self {
            line,
            key: key.into(),
            reason,
        }
    }

    /// Returns the severity of the underlying reason.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.reason.severity()
    }
}

impl fmt::Display for ProblemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: key '{}' {}", self.line, self.key, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    #[test]
    fn test_severity() {
        assert_eq!(ProblemReason::EmptyKey.severity(), Severity::Error);
        assert_eq!(ProblemReason::Unsanitizable.severity(), Severity::Error);
        assert_eq!(
            ProblemReason::Renamed {
                identifier: id("A_B")
            }
            .severity(),
            Severity::Warning
        );
    }

    #[test]
    fn test_display() {
        let record = ProblemRecord::new(3, "", ProblemReason::EmptyKey);
        assert_eq!(record.to_string(), "line 3: key '' key is empty");

        let record = ProblemRecord::new(
            4,
            "a--b",
            ProblemReason::Renamed {
                identifier: id("A_B"),
            },
        );
        assert_eq!(record.to_string(), "line 4: key 'a--b' sanitized to 'A_B'");

        let record = ProblemRecord::new(
            9,
            "a b",
            ProblemReason::Duplicate {
                base: id("A_B"),
                emitted: id("A_B_2"),
                first_line: 4,
            },
        );
        assert_eq!(
            record.to_string(),
            "line 9: key 'a b' collides with 'A_B' from line 4, emitted as 'A_B_2'"
        );

        let record = ProblemRecord::new(
            2,
            "ids",
            ProblemReason::ClassNameClash {
                emitted: id("IDS_2"),
            },
        );
        assert_eq!(record.severity(), Severity::Warning);
        assert_eq!(
            record.to_string(),
            "line 2: key 'ids' matches the class name, emitted as 'IDS_2'"
        );
    }
}
