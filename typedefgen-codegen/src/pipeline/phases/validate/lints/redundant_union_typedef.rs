//! Lint for typedefs that spell the same union.

use std::collections::BTreeMap;

use typedefgen_schema::{Schema, TypeExpr, TypeRef};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes union typedefs declaring the same members.
///
/// Such typedefs are not an error: both become renames of one binding
/// class. The note points out that the second declaration adds nothing.
pub struct RedundantUnionTypedefLint;

impl Lint for RedundantUnionTypedefLint {
    fn name(&self) -> &'static str {
        "redundant-union-typedef"
    }

    fn description(&self) -> &'static str {
        "Detect union typedefs that declare the same member types"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: BTreeMap<(Vec<TypeRef<'_>>, bool), &str> = BTreeMap::new();

        for (name, typedef) in &schema.typedefs {
            let TypeExpr::Union(_) = &typedef.ty else {
                continue;
            };

            let mut members: Vec<TypeRef<'_>> = typedef.ty.refs().collect();
            members.sort();

            match seen.get(&(members.clone(), typedef.nullable)) {
                Some(first) => diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "typedef '{}' declares the same union as '{}'; both rename one binding class",
                            name, first
                        ),
                    )
                    .at(format!("typedefs.{}", name)),
                ),
                None => {
                    seen.insert((members, typedef.nullable), name);
                }
            }
        }
    }
}
