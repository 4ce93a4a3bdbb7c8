//! Computed data from database analysis.
//!
//! [`ComputedData`] holds the per-component declarations produced by the
//! analyze phase, so that target generators only assemble files.

use serde::Serialize;
use tracing::{debug, trace};
use typedefgen_ir::{Database, Tier};
use typedefgen_schema::{ComponentsConfig, Schema};

use crate::{
    Error,
    emit::{ComponentDeclarations, DeclarationEmitter},
    naming::NameRegistry,
    partition::partition,
};

/// The component name a tier maps to in the schema.
pub fn component_name(components: &ComponentsConfig, tier: Tier) -> &str {
    match tier {
        Tier::Base => &components.base,
        Tier::Extended => &components.extended,
    }
}

/// One component's share of the pass.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentOutput {
    pub tier: Tier,
    /// Component name from the schema (e.g. "core").
    pub component: String,
    /// Aliases partitioned into this component.
    pub alias_count: usize,
    /// Union specializations partitioned into this component.
    pub union_count: usize,
    pub declarations: ComponentDeclarations,
}

/// Pre-computed data from database analysis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComputedData {
    /// One entry per tier, base first.
    pub components: Vec<ComponentOutput>,
    /// Total number of aliases in the database.
    pub alias_count: usize,
    /// Total number of union specializations in the database.
    pub union_count: usize,
}

impl ComputedData {
    /// Partition the database and emit every component's declarations.
    pub fn from_database(db: &Database, schema: &Schema) -> Result<Self, Error> {
        let prefix = schema.generator.class_prefix.as_str();
        let aliases = partition(db.aliases());
        let unions = partition(db.unions());
        let mut registry = NameRegistry::for_database(prefix, db)?;

        let mut components = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            let mut emitter = DeclarationEmitter::new(db, tier, prefix);
            emitter.emit_typedefs(aliases.tier(tier), &mut registry)?;
            emitter.emit_unions(unions.tier(tier), &mut registry)?;
            let declarations = emitter.finish();

            debug!(
                %tier,
                renames = declarations.rename_count(),
                forward_decls = declarations.forward_decls.len(),
                "emitted component declarations"
            );

            components.push(ComponentOutput {
                tier,
                component: component_name(&schema.components, tier).to_string(),
                alias_count: aliases.tier(tier).len(),
                union_count: unions.tier(tier).len(),
                declarations,
            });
        }

        for (name, canonical) in registry.renames() {
            trace!(%name, %canonical, "claimed rename");
        }

        Ok(Self {
            components,
            alias_count: db.alias_count(),
            union_count: db.union_count(),
        })
    }

    /// Output of one tier.
    pub fn component(&self, tier: Tier) -> Option<&ComponentOutput> {
        self.components.iter().find(|c| c.tier == tier)
    }

    /// Number of rename declarations across every component.
    pub fn rename_count(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.declarations.rename_count())
            .sum()
    }
}
