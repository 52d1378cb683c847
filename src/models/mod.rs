//! Data models for csvconst.
//!
//! This module contains the value types passed between the sanitizer, the
//! generator and the renderers.

mod constant;
mod identifier;
mod problem;

pub use constant::Constant;
pub use identifier::Identifier;
pub use problem::{ProblemReason, ProblemRecord, Severity};
