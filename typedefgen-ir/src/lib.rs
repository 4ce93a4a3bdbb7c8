//! Intermediate representation types for typedefgen.
//!
//! This crate holds the resolved, read-only database the generator works on.
//! Every alias reference has been resolved and every union type expression
//! has been flattened and merged into a single [`UnionSpecialization`].
//!
//! # Architecture
//!
//! ```text
//! typedefs.toml (TOML) → typedefgen-schema (parsing) → typedefgen-ir (database) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Target-agnostic (no C++ naming or file layout concerns)
//! - Immutable once built (the pass only reads them)
//! - Self-contained (no external dependencies beyond serde)

mod database;
mod tier;
mod types;

pub use database::{Alias, AliasTarget, Database, UnionSpecialization};
pub use tier::{ComponentSet, Tier};
pub use types::{MEMBER_SEPARATOR, MemberType, NULL_SENTINEL, UnionKey, UnionType, join_pieces};
