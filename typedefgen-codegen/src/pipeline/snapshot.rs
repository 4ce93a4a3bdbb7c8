//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the pipeline state after each phase so the lowering and
//! emission decisions can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use serde::Serialize;
use tracing::debug;
use typedefgen_ir::Database;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::ComputedData;

/// The pipeline state right after a phase completed.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    /// Available after the "lower" phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<Database>,

    /// Available after the "analyze" phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<ComputedData>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Backs the `--visualize` flag of `typedefgen bake`.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".typedefgen/debug"));
/// let ctx = pipeline.run(schema)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// When set, each snapshot is written as `<phase>.json` as soon as it is taken.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to a directory.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.iter() {
            write_snapshot(dir.as_ref(), snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
    debug!(path = %path.display(), "wrote phase snapshot");
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            database: ctx.database.clone(),
            computed: ctx.computed.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_are_written_per_phase() {
        let dir = tempfile::tempdir().unwrap();
        let debug_dir = dir.path().join("debug");

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(&debug_dir))
            .run(typedefgen_schema::Schema::default())
            .unwrap();

        for phase in ["validate", "lower", "analyze"] {
            assert!(debug_dir.join(format!("{phase}.json")).exists());
        }

        let analyze = std::fs::read_to_string(debug_dir.join("analyze.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&analyze).unwrap();
        assert_eq!(value["phase"], "analyze");
        assert!(value["computed"]["components"].is_array());
    }
}
