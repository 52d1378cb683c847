//! Generated constant declarations.

use super::Identifier;

/// One constant to be emitted: `identifier = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// 1-based physical line the key came from.
    pub line: usize,
    /// The constant name.
    pub identifier: Identifier,
    /// The trimmed raw key, emitted as the string value.
    pub value: String,
}

impl Constant {
    /// Creates a constant.
    #[must_use]
    pub fn new(line: usize, identifier: Identifier, value: impl Into<String>) -> Self {
        Self {
            line,
            identifier,
            value: value.into(),
        }
    }
}
