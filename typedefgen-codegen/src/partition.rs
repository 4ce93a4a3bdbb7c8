//! Two-tier component partitioning.

use typedefgen_ir::{Alias, ComponentSet, Tier, UnionSpecialization};

/// An entity that lands in exactly one component's generated file.
pub trait Partitioned {
    fn identifier(&self) -> &str;
    fn components(&self) -> &ComponentSet;
}

impl Partitioned for Alias {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn components(&self) -> &ComponentSet {
        &self.components
    }
}

impl Partitioned for UnionSpecialization {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn components(&self) -> &ComponentSet {
        &self.components
    }
}

impl<T: Partitioned + ?Sized> Partitioned for &T {
    fn identifier(&self) -> &str {
        (**self).identifier()
    }

    fn components(&self) -> &ComponentSet {
        (**self).components()
    }
}

/// Entities split by owning tier, each bucket sorted by identifier.
#[derive(Debug, Clone)]
pub struct Partition<T> {
    base: Vec<T>,
    extended: Vec<T>,
}

impl<T> Partition<T> {
    /// The entities emitted in a tier's file.
    pub fn tier(&self, tier: Tier) -> &[T] {
        match tier {
            Tier::Base => &self.base,
            Tier::Extended => &self.extended,
        }
    }

    /// Total number of entities across both tiers.
    pub fn len(&self) -> usize {
        self.base.len() + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split entities into base and extended buckets.
///
/// An entity goes to the extended tier iff its component set contains it.
/// Buckets are ordered by identifier, byte-wise and case-sensitive.
pub fn partition<T: Partitioned>(entities: impl IntoIterator<Item = T>) -> Partition<T> {
    let (mut extended, mut base): (Vec<T>, Vec<T>) = entities
        .into_iter()
        .partition(|entity| entity.components().owner() == Tier::Extended);

    base.sort_by(|a, b| a.identifier().cmp(b.identifier()));
    extended.sort_by(|a, b| a.identifier().cmp(b.identifier()));

    Partition { base, extended }
}

#[cfg(test)]
mod tests {
    use typedefgen_ir::AliasTarget;

    use super::*;

    fn alias(identifier: &str, tiers: &[Tier]) -> Alias {
        Alias {
            identifier: identifier.into(),
            target: AliasTarget::Named {
                name: "String".into(),
                nullable: false,
            },
            components: tiers.iter().copied().collect(),
        }
    }

    fn ids<'a>(entities: &[&'a Alias]) -> Vec<&'a str> {
        entities.iter().map(|a| a.identifier.as_str()).collect()
    }

    #[test]
    fn test_partition_by_extended_membership() {
        let aliases = vec![
            alias("Shared", &[Tier::Base, Tier::Extended]),
            alias("CoreOnly", &[Tier::Base]),
            alias("ModulesOnly", &[Tier::Extended]),
        ];

        let partition = partition(&aliases);

        assert_eq!(ids(partition.tier(Tier::Base)), vec!["CoreOnly"]);
        assert_eq!(
            ids(partition.tier(Tier::Extended)),
            vec!["ModulesOnly", "Shared"]
        );
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let aliases = vec![
            alias("D", &[Tier::Extended]),
            alias("A", &[Tier::Base]),
            alias("C", &[Tier::Base, Tier::Extended]),
            alias("B", &[]),
        ];

        let partition = partition(&aliases);
        assert_eq!(partition.len(), aliases.len());

        let mut all: Vec<&str> = Tier::ALL
            .iter()
            .flat_map(|tier| ids(partition.tier(*tier)))
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_partition_sorting_is_case_sensitive() {
        let aliases = vec![
            alias("beta", &[Tier::Base]),
            alias("Zeta", &[Tier::Base]),
            alias("Alpha", &[Tier::Base]),
        ];

        let partition = partition(&aliases);
        assert_eq!(
            ids(partition.tier(Tier::Base)),
            vec!["Alpha", "Zeta", "beta"]
        );
    }
}
