//! Rust renderer.

use std::fmt::Write;

use super::{
    ConstantsRenderer, GENERATED_HEADER, GENERATED_WARNING, Language, escape_literal,
};
use crate::models::{Constant, Identifier};

/// Strict and reserved Rust keywords.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Emits a unit struct with associated string constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl ConstantsRenderer for RustRenderer {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn render(&self, class_name: &Identifier, constants: &[Constant]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// {GENERATED_HEADER}");
        let _ = writeln!(out, "// {GENERATED_WARNING}");
        let _ = writeln!(out);
        let _ = writeln!(out, "#[allow(non_camel_case_types)]");
        let _ = writeln!(out, "pub struct {class_name};");
        let _ = writeln!(out);
        let _ = writeln!(out, "impl {class_name} {{");
        for constant in constants {
            let _ = writeln!(
                out,
                "    pub const {}: &'static str = \"{}\";",
                constant.identifier,
                escape_literal(&constant.value, Language::Rust)
            );
        }
        let _ = writeln!(out, "}}");
        out
    }

    fn is_reserved(&self, name: &str) -> bool {
        KEYWORDS.contains(&name) || name == "_"
    }
}
