//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Line-oriented buffer that renders fragments
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for AST nodes that can be converted to fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
