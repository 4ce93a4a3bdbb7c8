//! Core operations.
//!
//! This module contains the business logic for typedefgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod explain;
pub mod init;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use explain::explain;
pub use init::init;
use eyre::Result;
use typedefgen_codegen::pipeline::{CompilationContext, Pipeline};
use typedefgen_schema::Schema;

/// Run a pipeline, folding error diagnostics into the failure report.
pub(crate) fn compile(pipeline: &Pipeline, schema: &Schema) -> Result<CompilationContext> {
    let mut ctx = CompilationContext::new(schema.clone());
    if let Err(err) = pipeline.execute(&mut ctx) {
        let errors: Vec<String> = ctx.errors().map(ToString::to_string).collect();
        let message = if errors.is_empty() {
            "Pipeline failed".to_string()
        } else {
            format!("Pipeline failed\n{}", errors.join("\n"))
        };
        return Err(err.wrap_err(message));
    }
    Ok(ctx)
}
