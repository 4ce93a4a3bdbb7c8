//! Per-component declaration emission.
//!
//! A [`DeclarationEmitter`] is created for one component tier. It turns the
//! tier's sorted aliases and union specializations into two blocks of rename
//! declarations and accumulates the canonical class names the file must
//! forward-declare.

use std::{
    collections::{BTreeSet, HashSet},
    fmt,
};

use serde::Serialize;
use tracing::trace;
use typedefgen_ir::{Alias, Database, Tier, UnionSpecialization};

use crate::{
    Error,
    naming::{NameRegistry, canonical_name, synthesize_union_alias_names},
};

/// A `using NewName = CanonicalName;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rename {
    pub name: String,
    pub canonical: String,
}

impl Rename {
    pub fn new(name: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            canonical: canonical.into(),
        }
    }
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "using {} = {};", self.name, self.canonical)
    }
}

/// Canonical class names a component's file must forward-declare.
///
/// Sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForwardDecls(BTreeSet<String>);

impl ForwardDecls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a forward declaration of `class`.
    pub fn require(&mut self, class: impl Into<String>) {
        self.0.insert(class.into());
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything one component's generated file declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentDeclarations {
    /// Block (a): aliases whose resolved type is a union.
    pub typedef_renames: Vec<Rename>,
    /// Block (b): alternate spellings of unions with alias members.
    pub union_renames: Vec<Rename>,
    pub forward_decls: ForwardDecls,
}

impl ComponentDeclarations {
    /// Number of rename declarations in both blocks.
    pub fn rename_count(&self) -> usize {
        self.typedef_renames.len() + self.union_renames.len()
    }

    /// Every rename, block (a) first.
    pub fn renames(&self) -> impl Iterator<Item = &Rename> {
        self.typedef_renames.iter().chain(&self.union_renames)
    }
}

/// Builds the declarations of one component tier.
pub struct DeclarationEmitter<'a> {
    db: &'a Database,
    tier: Tier,
    prefix: &'a str,
    emitted: HashSet<String>,
    output: ComponentDeclarations,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(db: &'a Database, tier: Tier, prefix: &'a str) -> Self {
        Self {
            db,
            tier,
            prefix,
            emitted: HashSet::new(),
            output: ComponentDeclarations::default(),
        }
    }

    /// Emit `using <Alias> = <Canonical>;` for every alias that resolves to a union.
    ///
    /// `aliases` must already be partitioned to this tier and sorted. Each
    /// alias identifier is claimed in the shared registry, so a typedef named
    /// like another class or another union's rename is a collision.
    pub fn emit_typedefs(
        &mut self,
        aliases: &[&Alias],
        registry: &mut NameRegistry,
    ) -> Result<(), Error> {
        for alias in aliases {
            let Some(key) = alias.union_key() else {
                continue;
            };

            let union = self.db.union(key).ok_or_else(|| Error::MissingBinding {
                union: key.identifier(),
                referrer: alias.identifier.clone(),
            })?;
            let canonical = canonical_name(self.prefix, union);
            self.check_layering(union, &alias.identifier, &canonical)?;

            registry.claim(&alias.identifier, &canonical)?;
            // A typedef spelled exactly like its class needs no rename
            let rename = Rename::new(&alias.identifier, &canonical);
            if alias.identifier != canonical && self.mark_emitted(&rename) {
                self.output.typedef_renames.push(rename);
            }
            self.output.forward_decls.require(canonical);
        }
        Ok(())
    }

    /// Emit the alternate spellings of every union with alias members.
    ///
    /// `unions` must already be partitioned to this tier and sorted. The
    /// registry is shared by every emitter of the pass.
    pub fn emit_unions(
        &mut self,
        unions: &[&UnionSpecialization],
        registry: &mut NameRegistry,
    ) -> Result<(), Error> {
        for union in unions {
            if union.alias_members.is_empty() {
                continue;
            }

            let canonical = canonical_name(self.prefix, union);
            if self.db.union_named(&union.identifier).is_none() {
                return Err(Error::MissingBinding {
                    union: union.identifier.clone(),
                    referrer: canonical,
                });
            }
            self.check_layering(union, &union.identifier, &canonical)?;

            for name in synthesize_union_alias_names(self.prefix, union) {
                if !registry.claim(&name, &canonical)? {
                    continue;
                }
                let rename = Rename::new(name, &canonical);
                if self.mark_emitted(&rename) {
                    self.output.union_renames.push(rename);
                }
            }
            self.output.forward_decls.require(canonical);
        }
        Ok(())
    }

    /// Finish the tier and hand back its declarations.
    pub fn finish(self) -> ComponentDeclarations {
        self.output
    }

    fn mark_emitted(&mut self, rename: &Rename) -> bool {
        let inserted = self.emitted.insert(rename.to_string());
        if !inserted {
            trace!(tier = %self.tier, declaration = %rename, "skipping duplicate declaration");
        }
        inserted
    }

    fn check_layering(
        &self,
        union: &UnionSpecialization,
        declaration: &str,
        class: &str,
    ) -> Result<(), Error> {
        if self.tier == Tier::Base && union.components.is_extended_only() {
            return Err(Error::LayeringViolation {
                component: self.tier.to_string(),
                declaration: declaration.to_string(),
                class: class.to_string(),
            });
        }
        Ok(())
    }
}
