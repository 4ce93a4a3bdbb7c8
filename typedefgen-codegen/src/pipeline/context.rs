//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use typedefgen_ir::Database;
use typedefgen_schema::Schema;

use super::diagnostic::{Diagnostic, Severity};
use crate::ComputedData;

/// State of one run, accumulated phase by phase.
#[derive(Debug)]
pub struct CompilationContext {
    /// The schema being compiled.
    pub schema: Schema,
    /// The resolved database (populated by LowerPhase).
    pub database: Option<Database>,
    /// Per-component declarations (populated by AnalyzePhase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            database: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Borrow the database, failing if LowerPhase hasn't run.
    pub fn database(&self) -> Result<&Database> {
        self.database
            .as_ref()
            .ok_or_else(|| eyre!("database not set - did LowerPhase run?"))
    }

    /// Take the computed data out of the context, failing if AnalyzePhase hasn't run.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("computed data not set - did AnalyzePhase run?"))
    }
}
