//! C# renderer.

use std::fmt::Write;

use super::{
    ConstantsRenderer, GENERATED_HEADER, GENERATED_WARNING, Language, escape_literal,
};
use crate::models::{Constant, Identifier};

/// C# reserved keywords (contextual keywords are legal type names).
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Emits a `public static class` with `public const string` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl ConstantsRenderer for CSharpRenderer {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn render(&self, class_name: &Identifier, constants: &[Constant]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "// {GENERATED_HEADER}");
        let _ = writeln!(out, "// {GENERATED_WARNING}");
        let _ = writeln!(out);
        let _ = writeln!(out, "public static class {class_name}");
        let _ = writeln!(out, "{{");
        for constant in constants {
            let _ = writeln!(
                out,
                "    public const string {} = \"{}\";",
                constant.identifier,
                escape_literal(&constant.value, Language::CSharp)
            );
        }
        let _ = writeln!(out, "}}");
        out
    }

    fn is_reserved(&self, name: &str) -> bool {
        KEYWORDS.contains(&name)
    }

    // CS0542: member names cannot be the same as their enclosing type.
    fn forbids_member_named_like_type(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(line: usize, id: &str, value: &str) -> Constant {
        Constant::new(line, Identifier::parse(id).unwrap(), value)
    }

    #[test]
    fn test_render() {
        let class_name = Identifier::parse("UiKeys").unwrap();
        let constants = vec![
            constant(2, "START_GAME", "Start Game"),
            constant(3, "QUOTE", "say \"hi\""),
        ];

        let rendered = CSharpRenderer.render(&class_name, &constants);
        assert_eq!(
            rendered,
            "// This file is auto-generated by csvconst.\n\
             // Do not modify this file directly. Changes will be overwritten.\n\
             \n\
             public static class UiKeys\n\
             {\n\
             \x20   public const string START_GAME = \"Start Game\";\n\
             \x20   public const string QUOTE = \"say \\\"hi\\\"\";\n\
             }\n"
        );
    }

    #[test]
    fn test_render_empty_class() {
        let class_name = Identifier::parse("Empty").unwrap();
        let rendered = CSharpRenderer.render(&class_name, &[]);
        assert!(rendered.ends_with("public static class Empty\n{\n}\n"));
    }

    #[test]
    fn test_reserved() {
        assert!(CSharpRenderer.is_reserved("class"));
        assert!(!CSharpRenderer.is_reserved("Class"));
        assert!(!CSharpRenderer.is_reserved("var"));
    }
}
