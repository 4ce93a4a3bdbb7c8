//! Lint trait for schema validation.

use serde::Serialize;
use typedefgen_schema::Schema;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone, Serialize)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the schema for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint (e.g., "typedef-naming").
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the schema and add any diagnostics.
    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
