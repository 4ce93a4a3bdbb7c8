//! C++ syntax nodes for generated headers.
//!
//! Every node implements [`Renderable`](typedefgen_codegen::builder::Renderable)
//! and is emitted through a `CodeBuilder`.

mod decls;
mod preprocessor;
mod scope;

pub use decls::{ClassDecl, Using};
pub use preprocessor::{Include, IncludeGuard};
pub use scope::{Namespace, Section};
