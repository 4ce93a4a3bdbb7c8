//! Pipeline orchestrator.

use eyre::Result;
use tracing::debug;
use typedefgen_schema::Schema;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower, analyze) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".typedefgen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(schema)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(ValidatePhase::new()),
                Box::new(LowerPhase),
                Box::new(AnalyzePhase),
            ],
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Describe every phase in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        self.phases.iter().map(|p| p.info()).collect()
    }

    /// Run the pipeline on a schema.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Use [`Pipeline::execute`]
    /// to keep the context (and its diagnostics) when a phase fails.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);
        self.execute(&mut ctx)?;
        Ok(ctx)
    }

    /// Run every phase against an existing context.
    pub fn execute(&self, ctx: &mut CompilationContext) -> Result<()> {
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        debug!(phase = phase_name, "running phase");
        phase.run(ctx)?;
        debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase complete"
        );

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use typedefgen_schema::parse_schema;

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPhase(Arc<Mutex<Vec<String>>>);

    impl Phase for RecordingPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn description(&self) -> &'static str {
            "Record the rendered renames"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let computed = ctx.computed.as_ref().ok_or_else(|| eyre::eyre!("no data"))?;
            let mut seen = self.0.lock().unwrap();
            for component in &computed.components {
                seen.extend(component.declarations.renames().map(|r| r.to_string()));
            }
            Ok(())
        }
    }

    fn schema(src: &str) -> Schema {
        parse_schema(src, "typedefs.toml").expect("test schema should parse")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(Schema::default())
            .expect("pipeline should succeed");

        assert!(ctx.database.is_some());
        assert!(ctx.computed.is_some());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(Schema::default())
            .expect("pipeline should succeed");

        assert_eq!(before.load(Ordering::SeqCst), 3);
        assert_eq!(after.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_user_phase_runs_last() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new().phase(RecordingPhase(seen.clone()));

        let names: Vec<_> = pipeline.phase_info().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["validate", "lower", "analyze", "record"]);

        pipeline
            .run(schema(
                r#"
                [typedefs.A]
                type = ["Blob", "String"]
                "#,
            ))
            .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["using A = V8UnionBlobOrString;".to_string()]
        );
    }

    #[test]
    fn test_execute_keeps_diagnostics_on_failure() {
        let mut ctx = CompilationContext::new(schema(
            r#"
            [typedefs.A]
            type = ["Blob?", "String?"]
            "#,
        ));

        let result = Pipeline::new().execute(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
        assert!(ctx.database.is_none());
    }
}
