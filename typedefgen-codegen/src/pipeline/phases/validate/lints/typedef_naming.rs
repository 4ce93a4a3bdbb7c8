//! Lint for typedef naming conventions.

use typedefgen_core::is_upper_camel_case;
use typedefgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about typedef identifiers that aren't UpperCamelCase.
///
/// Typedef identifiers become C++ type names next to generated binding
/// classes, so they follow the same convention: `BodyInit`, `HeadersInit`.
pub struct TypedefNamingLint;

impl Lint for TypedefNamingLint {
    fn name(&self) -> &'static str {
        "typedef-naming"
    }

    fn description(&self) -> &'static str {
        "Check typedef identifiers follow UpperCamelCase conventions"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for name in schema.typedefs.keys() {
            if !is_upper_camel_case(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "typedef '{}' should use UpperCamelCase (e.g., 'BodyInit' not 'body_init')",
                            name
                        ),
                    )
                    .at(format!("typedefs.{}", name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use typedefgen_schema::parse_schema;

    use super::*;

    fn check(src: &str) -> Vec<Diagnostic> {
        let schema = parse_schema(src, "typedefs.toml").unwrap();
        let mut diagnostics = Vec::new();
        TypedefNamingLint.check(&schema, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_camel_case_passes() {
        let diagnostics = check(
            r#"
            [typedefs.BodyInit]
            type = ["Blob", "String"]

            [typedefs.Float32List]
            type = "Float32Array"
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_snake_case_warns() {
        let diagnostics = check(
            r#"
            [typedefs.body_init]
            type = ["Blob", "String"]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("typedefs.body_init"));
    }
}
