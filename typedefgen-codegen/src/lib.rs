//! Shared code generation for typedefgen.
//!
//! This crate turns a parsed schema into per-component rename declarations.
//! Target crates (e.g. `typedefgen-codegen-cpp`) only assemble files around
//! the declarations computed here.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phase orchestration (validate → lower → analyze), diagnostics, plugins
//! - [`naming`] - Canonical name synthesis and the pass-wide name registry
//! - [`partition`] - Two-tier component partitioning
//! - [`emit`] - Per-component declaration emission
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Target language abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
mod computed;
pub mod emit;
mod error;
pub mod language;
pub mod naming;
pub mod partition;
pub mod pipeline;

pub use computed::{ComponentOutput, ComputedData, component_name};
pub use error::Error;
