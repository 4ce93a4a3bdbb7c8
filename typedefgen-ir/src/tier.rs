//! Component tiers.

use std::{collections::BTreeSet, fmt};

use serde::Serialize;

/// One of the two layering buckets an entity's declaration can land in.
///
/// The base tier must never depend on a symbol owned only by the extended
/// tier; the extended tier may depend on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Base,
    Extended,
}

impl Tier {
    /// Both tiers, lower layer first.
    pub const ALL: [Tier; 2] = [Tier::Base, Tier::Extended];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Base => "base",
            Tier::Extended => "extended",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of tiers that reference an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentSet(BTreeSet<Tier>);

impl ComponentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tier.
    pub fn insert(&mut self, tier: Tier) {
        self.0.insert(tier);
    }

    /// Add every tier of another set.
    pub fn merge(&mut self, other: &ComponentSet) {
        self.0.extend(other.0.iter().copied());
    }

    /// Check membership.
    pub fn contains(&self, tier: Tier) -> bool {
        self.0.contains(&tier)
    }

    /// The tier whose generated file owns the entity.
    ///
    /// Anything the extended tier references is emitted there; everything
    /// else falls back to the base tier.
    pub fn owner(&self) -> Tier {
        if self.contains(Tier::Extended) {
            Tier::Extended
        } else {
            Tier::Base
        }
    }

    /// True when only the extended tier references the entity.
    pub fn is_extended_only(&self) -> bool {
        self.0.len() == 1 && self.contains(Tier::Extended)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in tier order.
    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Tier> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Tier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
