//! Core utilities and types for typedefgen.
//!
//! This crate provides the file writing rules and naming helpers shared by
//! every stage of the generator.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{is_upper_camel_case, to_header_guard};
