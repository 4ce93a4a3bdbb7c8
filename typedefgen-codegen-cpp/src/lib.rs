//! C++ target for typedefgen.
//!
//! Assembles each component's rename declarations into one header.

mod generator;

pub mod ast;
pub mod files;

pub use ast::{ClassDecl, Include, IncludeGuard, Namespace, Section, Using};
pub use generator::Generator;
pub use typedefgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
