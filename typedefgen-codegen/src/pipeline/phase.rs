//! Pipeline phase trait.

use eyre::Result;
use serde::Serialize;

use super::CompilationContext;

/// Name and summary of a phase, as listed by `typedefgen explain`.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One step of the schema-to-declarations pipeline.
///
/// The default pipeline is `validate`, `lower`, `analyze`; each step leaves
/// its output on the [`CompilationContext`] for the next. Extra phases
/// registered on a pipeline run after `analyze`.
pub trait Phase: Send + Sync {
    /// Stable identifier, also handed to plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// An `Err` stops the pipeline. Anything recoverable belongs in
    /// `ctx.diagnostics`.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
