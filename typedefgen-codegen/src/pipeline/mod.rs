//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] manages the phases from schema to per-component declarations:
//!
//! - Explicit phase boundaries (validate → lower → analyze)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared computation via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use typedefgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(schema)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = cpp::Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
