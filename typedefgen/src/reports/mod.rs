//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod explain;
mod init;
mod output;

pub use bake::{
    BakeReport, ComponentSummary, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};
pub use check::CheckReport;
pub use explain::{ComponentAnalysis, ExplainReport, LintInfo, PhaseInfo, SchemaInfo};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
