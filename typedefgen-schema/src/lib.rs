// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Schema types and parsing for typedefs.toml files.
//!
//! The schema is the generator's only input: the named typedefs, the union
//! types used outside typedefs, and the `[generator]` / `[components]`
//! configuration tables.

mod error;
mod file;
mod parse;
mod schema;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::SchemaFile;
pub use parse::parse_schema;
pub use schema::{
    ComponentsConfig, GeneratorConfig, Schema, TypeExpr, TypeRef, TypedefDecl, UnionDecl,
};
pub use validate::ParseContext;
