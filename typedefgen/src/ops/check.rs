//! Check operation - schema validation.

use std::path::Path;

use typedefgen_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use typedefgen_schema::Schema;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline so that lowering and naming failures are
/// reported alongside lint diagnostics.
pub fn check(schema: &Schema, config_path: &Path) -> CheckReport {
    let mut ctx = CompilationContext::new(schema.clone());
    let outcome = Pipeline::new().execute(&mut ctx);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // Fatal errors past validation leave no diagnostic behind
    if let Err(err) = outcome
        && errors.is_empty()
    {
        errors.push(format!("{:#}", err));
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        rename_count: ctx.computed.as_ref().map(|c| c.rename_count()),
    }
}

#[cfg(test)]
mod tests {
    use typedefgen_schema::parse_schema;

    use super::*;

    fn run(src: &str) -> CheckReport {
        let schema = parse_schema(src, "typedefs.toml").unwrap();
        check(&schema, Path::new("typedefs.toml"))
    }

    #[test]
    fn test_valid_schema() {
        let report = run(
            r#"
            [typedefs.A]
            type = ["Blob", "String"]
            "#,
        );

        assert!(report.is_valid());
        assert_eq!(report.rename_count, Some(1));
    }

    #[test]
    fn test_lint_error_with_location() {
        let report = run(
            r#"
            [typedefs.A]
            type = ["Blob?", "String?"]
            "#,
        );

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].ends_with("--> typedefs.A"));
        assert_eq!(report.rename_count, None);
    }

    #[test]
    fn test_lowering_error_is_reported() {
        let report = run(
            r#"
            [typedefs.Name]
            type = "String"

            [[unions]]
            members = ["Name", "String"]
            "#,
        );

        assert!(!report.is_valid());
        assert!(report.errors[0].contains("not distinct"));
    }
}
