//! Built-in lints for schema validation.

mod nullable_members;
mod redundant_union_typedef;
mod typedef_naming;

pub use nullable_members::NullableMembersLint;
pub use redundant_union_typedef::RedundantUnionTypedefLint;
pub use typedef_naming::TypedefNamingLint;
