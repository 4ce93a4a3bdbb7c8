//! Lower phase - resolves the schema into the read-only database.
//!
//! Every alias is resolved through its chain, every union type expression is
//! flattened, and union expressions with equal keys are merged into one
//! [`UnionSpecialization`].

use std::collections::{BTreeMap, BTreeSet};

use eyre::Result;
use tracing::debug;
use typedefgen_ir::{
    Alias, AliasTarget, ComponentSet, Database, MemberType, Tier, UnionKey, UnionSpecialization,
    UnionType,
};
use typedefgen_schema::{Schema, TypeExpr, TypeRef};

use crate::{
    Error,
    pipeline::{CompilationContext, Phase},
};

/// Phase that builds the [`Database`] from the schema.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve typedefs and merge union types into specializations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let db = lower_schema(&ctx.schema)?;
        debug!(
            aliases = db.alias_count(),
            unions = db.union_count(),
            "lowered schema"
        );
        ctx.database = Some(db);
        Ok(())
    }
}

/// Lower a schema into a database.
pub fn lower_schema(schema: &Schema) -> Result<Database, Error> {
    Lowering::new(schema).run()
}

/// What a typedef denotes once its chain is followed.
#[derive(Debug, Clone)]
enum Resolved {
    Named { name: String, nullable: bool },
    Union(Flattened),
}

/// A union type expression with every alias member resolved.
#[derive(Debug, Clone)]
struct Flattened {
    /// Flattened member names; distinct once validated.
    members: Vec<String>,
    /// Whether a nullable type appears at any depth.
    nullable: bool,
    /// Alias identifiers referenced at any depth.
    aliases: BTreeSet<String>,
}

impl Flattened {
    fn key(&self) -> UnionKey {
        UnionKey::new(self.members.iter().cloned(), self.nullable)
    }
}

struct Lowering<'s> {
    schema: &'s Schema,
    resolved: BTreeMap<&'s str, Resolved>,
    resolving: Vec<&'s str>,
    unions: BTreeMap<String, UnionSpecialization>,
}

impl<'s> Lowering<'s> {
    fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            resolved: BTreeMap::new(),
            resolving: Vec::new(),
            unions: BTreeMap::new(),
        }
    }

    fn run(mut self) -> Result<Database, Error> {
        let schema = self.schema;
        let mut db = Database::new();

        for (name, typedef) in &schema.typedefs {
            let entity = format!("typedef '{}'", name);
            let components = self.components_of(&typedef.components, &entity)?;
            self.check_layering(typedef.ty.refs(), &components, &entity)?;

            let target = match self.resolve_alias(name)? {
                Resolved::Named { name, nullable } => AliasTarget::Named { name, nullable },
                Resolved::Union(flattened) => {
                    let spelling = match &typedef.ty {
                        TypeExpr::Union(members) => {
                            Some(self.spelling(members, flattened.nullable))
                        }
                        TypeExpr::Single(_) => None,
                    };
                    AliasTarget::Union(self.register_union(&flattened, spelling, &components)?)
                }
            };

            db.insert_alias(Alias {
                identifier: name.clone(),
                target,
                components,
            });
        }

        for (index, union) in schema.unions.iter().enumerate() {
            let entity = format!("union #{}", index + 1);
            let components = self.components_of(&union.components, &entity)?;
            self.check_layering(union.as_type().refs(), &components, &entity)?;

            let flattened = self.flatten(&union.members, union.nullable, &entity)?;
            let spelling = self.spelling(&union.members, flattened.nullable);
            self.register_union(&flattened, Some(spelling), &components)?;
        }

        for union in self.unions.into_values() {
            db.insert_union(union);
        }
        Ok(db)
    }

    /// Map schema component names to tiers; no names means the base tier.
    fn components_of(&self, names: &[String], entity: &str) -> Result<ComponentSet, Error> {
        let config = &self.schema.components;
        if names.is_empty() {
            return Ok([Tier::Base].into_iter().collect());
        }

        names
            .iter()
            .map(|name| {
                if *name == config.base {
                    Ok(Tier::Base)
                } else if *name == config.extended {
                    Ok(Tier::Extended)
                } else {
                    Err(Error::inconsistency(format!(
                        "{} references unknown component '{}' (expected '{}' or '{}')",
                        entity, name, config.base, config.extended
                    )))
                }
            })
            .collect()
    }

    /// A base-only entity may not reference an alias only the extended tier owns.
    fn check_layering<'r>(
        &self,
        refs: impl Iterator<Item = TypeRef<'r>>,
        components: &ComponentSet,
        entity: &str,
    ) -> Result<(), Error> {
        if components.contains(Tier::Extended) {
            return Ok(());
        }

        for r in refs {
            let Some(typedef) = self.schema.typedefs.get(r.name) else {
                continue;
            };
            let owner = self.components_of(&typedef.components, &format!("typedef '{}'", r.name))?;
            if owner.is_extended_only() {
                return Err(Error::inconsistency(format!(
                    "{} belongs to the '{}' component but references typedef '{}', which only '{}' owns",
                    entity, self.schema.components.base, r.name, self.schema.components.extended
                )));
            }
        }
        Ok(())
    }

    fn resolve_alias(&mut self, name: &'s str) -> Result<Resolved, Error> {
        if let Some(resolved) = self.resolved.get(name) {
            return Ok(resolved.clone());
        }
        if self.resolving.contains(&name) {
            return Err(Error::inconsistency(format!(
                "typedef cycle: {} -> {}",
                self.resolving.join(" -> "),
                name
            )));
        }

        let schema = self.schema;
        let Some(typedef) = schema.typedefs.get(name) else {
            return Err(Error::inconsistency(format!("unknown typedef '{}'", name)));
        };

        self.resolving.push(name);
        let resolved = match &typedef.ty {
            TypeExpr::Single(ty) => {
                let r = TypeRef::parse(ty);
                let nullable = r.nullable || typedef.nullable;
                if schema.has_typedef(r.name) {
                    match self.resolve_alias(r.name)? {
                        Resolved::Named {
                            name,
                            nullable: inner,
                        } => Resolved::Named {
                            name,
                            nullable: nullable || inner,
                        },
                        Resolved::Union(mut flattened) => {
                            flattened.nullable |= nullable;
                            Resolved::Union(flattened)
                        }
                    }
                } else {
                    Resolved::Named {
                        name: r.name.to_string(),
                        nullable,
                    }
                }
            }
            TypeExpr::Union(members) => Resolved::Union(self.flatten(
                members,
                typedef.nullable,
                &format!("typedef '{}'", name),
            )?),
        };
        self.resolving.pop();

        self.resolved.insert(name, resolved.clone());
        Ok(resolved)
    }

    fn flatten(
        &mut self,
        members: &'s [String],
        nullable: bool,
        entity: &str,
    ) -> Result<Flattened, Error> {
        if members.len() < 2 {
            return Err(Error::inconsistency(format!(
                "{} is a union with {} member type(s)",
                entity,
                members.len()
            )));
        }

        let mut flattened = Flattened {
            members: Vec::new(),
            nullable,
            aliases: BTreeSet::new(),
        };

        for member in members {
            let r = TypeRef::parse(member);
            flattened.nullable |= r.nullable;

            if !self.schema.has_typedef(r.name) {
                flattened.members.push(r.name.to_string());
                continue;
            }

            flattened.aliases.insert(r.name.to_string());
            match self.resolve_alias(r.name)? {
                Resolved::Named { name, nullable } => {
                    flattened.members.push(name);
                    flattened.nullable |= nullable;
                }
                Resolved::Union(inner) => {
                    flattened.members.extend(inner.members);
                    flattened.nullable |= inner.nullable;
                    flattened.aliases.extend(inner.aliases);
                }
            }
        }

        let mut seen = BTreeSet::new();
        if let Some(duplicate) = flattened.members.iter().find(|m| !seen.insert(m.as_str())) {
            return Err(Error::inconsistency(format!(
                "member types of {} are not distinct: '{}' appears more than once after resolving typedefs",
                entity, duplicate
            )));
        }

        Ok(flattened)
    }

    /// The declared spelling of a union expression.
    fn spelling(&self, members: &[String], nullable: bool) -> UnionType {
        let members = members
            .iter()
            .map(|member| {
                let r = TypeRef::parse(member);
                if self.schema.has_typedef(r.name) {
                    MemberType::Alias {
                        identifier: r.name.to_string(),
                        nullable: r.nullable,
                    }
                } else {
                    MemberType::Named {
                        name: r.name.to_string(),
                        nullable: r.nullable,
                    }
                }
            })
            .collect();
        UnionType { members, nullable }
    }

    /// Merge a union usage into the specialization with the same key.
    fn register_union(
        &mut self,
        flattened: &Flattened,
        spelling: Option<UnionType>,
        components: &ComponentSet,
    ) -> Result<UnionKey, Error> {
        let key = flattened.key();
        let union = self
            .unions
            .entry(key.identifier())
            .or_insert_with(|| UnionSpecialization::new(key.clone()));

        // Distinct member sets can still join to the same spelling
        if union.key != key {
            return Err(Error::NameCollision {
                name: union.identifier.clone(),
                first: describe(&union.key),
                second: describe(&key),
            });
        }

        union.alias_members.extend(flattened.aliases.iter().cloned());
        union.components.merge(components);
        if let Some(spelling) = spelling {
            union.add_idl_type(spelling);
        }
        Ok(key)
    }
}

/// Human-readable form of a union key, e.g. `(Blob or String)?`.
fn describe(key: &UnionKey) -> String {
    let members: Vec<&str> = key.members.iter().map(String::as_str).collect();
    format!(
        "({}){}",
        members.join(" or "),
        if key.nullable { "?" } else { "" }
    )
}
