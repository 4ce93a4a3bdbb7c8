//! Canonical and alternate binding class names for union specializations.
//!
//! A specialization's canonical name is spelled from its flattened member
//! types. A declared union that lists an alias among its members has a
//! second, natural spelling using the alias identifier as the piece; that
//! spelling becomes a rename of the canonical class.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use typedefgen_ir::{Database, MemberType, UnionSpecialization, UnionType, join_pieces};

use crate::Error;

/// Build a binding class name from unordered spelling pieces.
///
/// Pieces are sorted byte-wise; the null sentinel is appended after the sort.
pub fn union_class_name<'a>(
    prefix: &str,
    pieces: impl IntoIterator<Item = &'a str>,
    nullable: bool,
) -> String {
    let mut pieces: Vec<&str> = pieces.into_iter().collect();
    pieces.sort_unstable();
    format!("{}{}", prefix, join_pieces(pieces, nullable))
}

/// The canonical binding class name of a specialization.
pub fn canonical_name(prefix: &str, union: &UnionSpecialization) -> String {
    format!("{}{}", prefix, union.identifier)
}

/// Name of one declared spelling, if any of its direct members is an alias.
fn spelling_name(prefix: &str, idl_type: &UnionType) -> Option<String> {
    if !idl_type.has_alias_member() {
        return None;
    }
    Some(union_class_name(
        prefix,
        idl_type.members.iter().map(MemberType::spelling),
        idl_type.nullable,
    ))
}

/// Candidate rename names for one specialization, sorted and deduplicated.
///
/// Empty when no declared spelling reaches an alias.
pub fn synthesize_union_alias_names(prefix: &str, union: &UnionSpecialization) -> Vec<String> {
    if union.alias_members.is_empty() {
        return Vec::new();
    }

    let names: BTreeSet<String> = union
        .idl_types
        .iter()
        .filter_map(|idl_type| spelling_name(prefix, idl_type))
        .collect();
    names.into_iter().collect()
}

/// Pass-wide record of which binding class every synthesized name points to.
///
/// Every canonical name is claimed by itself up front, so a candidate that
/// spells another specialization's canonical name is caught as well.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    /// name -> canonical class it denotes, in claim order
    claims: IndexMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the canonical name of every specialization.
    pub fn for_database(prefix: &str, db: &Database) -> Result<Self, Error> {
        let mut registry = Self::new();
        for union in db.unions() {
            let canonical = canonical_name(prefix, union);
            registry.claim(&canonical, &canonical)?;
        }
        Ok(registry)
    }

    /// Claim `name` as a rename of `canonical`.
    ///
    /// Returns `Ok(true)` when the rename should be emitted, `Ok(false)` when
    /// it is redundant (a self-rename or already claimed for the same class).
    pub fn claim(&mut self, name: &str, canonical: &str) -> Result<bool, Error> {
        match self.claims.get(name) {
            Some(owner) if owner == canonical => Ok(false),
            Some(owner) => Err(Error::NameCollision {
                name: name.to_string(),
                first: owner.clone(),
                second: canonical.to_string(),
            }),
            None => {
                self.claims.insert(name.to_string(), canonical.to_string());
                Ok(name != canonical)
            }
        }
    }

    /// Every claimed name that is not itself canonical, in claim order.
    pub fn renames(&self) -> impl Iterator<Item = (&str, &str)> {
        self.claims
            .iter()
            .filter(|(name, canonical)| name != canonical)
            .map(|(name, canonical)| (name.as_str(), canonical.as_str()))
    }
}
