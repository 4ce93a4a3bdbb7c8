//! The resolved schema database.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{ComponentSet, UnionKey, UnionType};

/// What an alias resolves to once every alias in its chain is followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AliasTarget {
    /// A non-union type.
    Named { name: String, nullable: bool },
    /// A union specialization.
    Union(UnionKey),
}

/// A named shorthand for another type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub identifier: String,
    pub target: AliasTarget,
    pub components: ComponentSet,
}

impl Alias {
    /// The union this alias resolves to, if its resolved type is a union.
    pub fn union_key(&self) -> Option<&UnionKey> {
        match &self.target {
            AliasTarget::Union(key) => Some(key),
            AliasTarget::Named { .. } => None,
        }
    }
}

/// A concrete set of alternative member types a binding class exists for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionSpecialization {
    /// Flattened spelling, e.g. `BlobOrStringOrNull`.
    pub identifier: String,
    pub key: UnionKey,
    /// Every distinct declared spelling that resolves to this specialization.
    pub idl_types: Vec<UnionType>,
    /// Alias identifiers referenced by any declared spelling, at any depth.
    pub alias_members: BTreeSet<String>,
    pub components: ComponentSet,
}

impl UnionSpecialization {
    /// Create a specialization with no recorded usages yet.
    pub fn new(key: UnionKey) -> Self {
        Self {
            identifier: key.identifier(),
            key,
            idl_types: Vec::new(),
            alias_members: BTreeSet::new(),
            components: ComponentSet::new(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.key.nullable
    }

    /// Record a declared spelling; identical spellings are kept once.
    pub fn add_idl_type(&mut self, idl_type: UnionType) {
        if !self.idl_types.contains(&idl_type) {
            self.idl_types.push(idl_type);
        }
    }
}

/// Read-only snapshot of all aliases and union specializations.
///
/// Both collections iterate in identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Database {
    aliases: BTreeMap<String, Alias>,
    unions: BTreeMap<String, UnionSpecialization>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alias, returning the previous alias with the same identifier.
    pub fn insert_alias(&mut self, alias: Alias) -> Option<Alias> {
        self.aliases.insert(alias.identifier.clone(), alias)
    }

    /// Insert a union specialization, returning the previous one with the
    /// same identifier.
    pub fn insert_union(&mut self, union: UnionSpecialization) -> Option<UnionSpecialization> {
        self.unions.insert(union.identifier.clone(), union)
    }

    /// Look up an alias by identifier.
    pub fn alias(&self, identifier: &str) -> Option<&Alias> {
        self.aliases.get(identifier)
    }

    /// Look up a union specialization by identifier.
    pub fn union_named(&self, identifier: &str) -> Option<&UnionSpecialization> {
        self.unions.get(identifier)
    }

    /// Look up the union specialization with the given structural identity.
    pub fn union(&self, key: &UnionKey) -> Option<&UnionSpecialization> {
        self.unions
            .get(&key.identifier())
            .filter(|union| union.key == *key)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.values()
    }

    pub fn unions(&self) -> impl Iterator<Item = &UnionSpecialization> {
        self.unions.values()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn union_count(&self) -> usize {
        self.unions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemberType, Tier};

    fn named(name: &str) -> MemberType {
        MemberType::Named {
            name: name.into(),
            nullable: false,
        }
    }

    #[test]
    fn test_union_lookup_by_key_and_identifier() {
        let key = UnionKey::new(["Blob", "String"], false);
        let mut db = Database::new();
        db.insert_union(UnionSpecialization::new(key.clone()));

        assert!(db.union(&key).is_some());
        assert!(db.union_named("BlobOrString").is_some());
        assert!(db.union(&UnionKey::new(["Blob", "String"], true)).is_none());
    }

    #[test]
    fn test_alias_union_key() {
        let key = UnionKey::new(["Blob", "String"], false);
        let alias = Alias {
            identifier: "A".into(),
            target: AliasTarget::Union(key.clone()),
            components: [Tier::Base].into_iter().collect(),
        };
        let plain = Alias {
            identifier: "B".into(),
            target: AliasTarget::Named {
                name: "String".into(),
                nullable: false,
            },
            components: [Tier::Base].into_iter().collect(),
        };

        assert_eq!(alias.union_key(), Some(&key));
        assert_eq!(plain.union_key(), None);
    }

    #[test]
    fn test_add_idl_type_deduplicates() {
        let mut union = UnionSpecialization::new(UnionKey::new(["Blob", "String"], false));
        let spelling = UnionType {
            members: vec![named("Blob"), named("String")],
            nullable: false,
        };

        union.add_idl_type(spelling.clone());
        union.add_idl_type(spelling);

        assert_eq!(union.idl_types.len(), 1);
    }

    #[test]
    fn test_iteration_is_identifier_ordered() {
        let mut db = Database::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            db.insert_alias(Alias {
                identifier: name.into(),
                target: AliasTarget::Named {
                    name: "String".into(),
                    nullable: false,
                },
                components: ComponentSet::new(),
            });
        }

        let ids: Vec<_> = db.aliases().map(|a| a.identifier.as_str()).collect();
        assert_eq!(ids, vec!["Alpha", "Mid", "Zeta"]);
    }
}
