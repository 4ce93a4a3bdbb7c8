//! Analyze phase - partitions the database and emits declarations.

use eyre::Result;
use tracing::debug;

use crate::{
    ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Phase that computes every component's declarations from the database.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Partition entities into components and emit rename declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let computed = ComputedData::from_database(ctx.database()?, &ctx.schema)?;
        debug!(renames = computed.rename_count(), "analysis complete");
        ctx.computed = Some(computed);
        Ok(())
    }
}
