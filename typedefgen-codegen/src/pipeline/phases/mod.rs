//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the schema and collects diagnostics
//! - [`LowerPhase`] - resolves aliases and builds the database
//! - [`AnalyzePhase`] - partitions entities and emits per-component declarations

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::{LowerPhase, lower_schema};
pub use validate::{
    Lint, LintInfo, NullableMembersLint, RedundantUnionTypedefLint, TypedefNamingLint,
    ValidatePhase,
};
