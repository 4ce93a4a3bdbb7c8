//! Core type definitions.

use std::collections::BTreeSet;

use serde::Serialize;

/// Separator placed between the pieces of a union spelling.
pub const MEMBER_SEPARATOR: &str = "Or";

/// Piece appended to a union spelling that includes a nullable type.
pub const NULL_SENTINEL: &str = "Null";

/// Join already-ordered spelling pieces, appending the null sentinel last.
///
/// The nullable piece is never part of the sort; callers order the member
/// pieces first.
pub fn join_pieces<'a>(pieces: impl IntoIterator<Item = &'a str>, nullable: bool) -> String {
    let mut pieces: Vec<&str> = pieces.into_iter().collect();
    if nullable {
        pieces.push(NULL_SENTINEL);
    }
    pieces.join(MEMBER_SEPARATOR)
}

/// A member of a union type as it was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberType {
    /// A primitive or object type, already spelled canonically (e.g. `String`).
    Named { name: String, nullable: bool },
    /// A reference to an alias by identifier.
    Alias { identifier: String, nullable: bool },
}

impl MemberType {
    /// The alias identifier, if this member is an alias reference.
    pub fn alias(&self) -> Option<&str> {
        match self {
            MemberType::Alias { identifier, .. } => Some(identifier),
            MemberType::Named { .. } => None,
        }
    }

    /// The spelling piece with nullability unwrapped.
    pub fn spelling(&self) -> &str {
        match self {
            MemberType::Named { name, .. } => name,
            MemberType::Alias { identifier, .. } => identifier,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            MemberType::Named { nullable, .. } | MemberType::Alias { nullable, .. } => *nullable,
        }
    }
}

/// One declared spelling of a union specialization.
///
/// Several declared unions can flatten to the same specialization; each
/// distinct member list is kept so that alias-based spellings can be derived
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnionType {
    /// Members in declaration order.
    pub members: Vec<MemberType>,
    /// Whether the union includes a nullable type at any depth.
    pub nullable: bool,
}

impl UnionType {
    /// Whether any member (nullability unwrapped) refers to an alias.
    pub fn has_alias_member(&self) -> bool {
        self.members.iter().any(|m| m.alias().is_some())
    }
}

/// Structural identity of a union specialization.
///
/// Two unions are the same specialization iff their fully resolved member
/// sets and nullable flags are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UnionKey {
    /// Flattened member type names, every alias resolved.
    pub members: BTreeSet<String>,
    pub nullable: bool,
}

impl UnionKey {
    pub fn new(members: impl IntoIterator<Item = impl Into<String>>, nullable: bool) -> Self {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            nullable,
        }
    }

    /// The specialization identifier, e.g. `BlobOrStringOrNull`.
    pub fn identifier(&self) -> String {
        join_pieces(self.members.iter().map(String::as_str), self.nullable)
    }
}
