//! Lint for nullable member types of unions.

use typedefgen_schema::{Schema, TypeExpr, TypeRef};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on unions with conflicting nullable member types.
///
/// A union may include at most one nullable member type, and a union that is
/// itself nullable may not include any. A member counts as nullable when it
/// is marked with `?` or names a typedef that includes a nullable type.
pub struct NullableMembersLint;

impl Lint for NullableMembersLint {
    fn name(&self) -> &'static str {
        "nullable-members"
    }

    fn description(&self) -> &'static str {
        "Check unions include at most one nullable member type"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for (name, typedef) in &schema.typedefs {
            if let TypeExpr::Union(members) = &typedef.ty {
                check_union(
                    schema,
                    members,
                    typedef.nullable,
                    &format!("typedef '{}'", name),
                    format!("typedefs.{}", name),
                    diagnostics,
                );
            }
        }

        for (index, union) in schema.unions.iter().enumerate() {
            check_union(
                schema,
                &union.members,
                union.nullable,
                &format!("union #{}", index + 1),
                format!("unions[{}]", index),
                diagnostics,
            );
        }
    }
}

fn check_union(
    schema: &Schema,
    members: &[String],
    nullable: bool,
    entity: &str,
    location: String,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let nullable_members: Vec<&str> = members
        .iter()
        .map(|m| TypeRef::parse(m))
        .filter(|r| includes_nullable(schema, *r, schema.typedefs.len()))
        .map(|r| r.name)
        .collect();

    let message = if nullable_members.len() > 1 {
        format!(
            "{} has {} nullable member types ({}); at most one is allowed",
            entity,
            nullable_members.len(),
            nullable_members.join(", ")
        )
    } else if nullable && !nullable_members.is_empty() {
        format!(
            "{} is nullable and also has the nullable member type '{}'",
            entity, nullable_members[0]
        )
    } else {
        return;
    };

    diagnostics.push(Diagnostic::error("validate", message).at(location));
}

/// Whether a member reference includes a nullable type, looking through typedefs.
///
/// `depth` bounds the walk so a cyclic schema cannot recurse forever.
fn includes_nullable(schema: &Schema, member: TypeRef<'_>, depth: usize) -> bool {
    if member.nullable {
        return true;
    }
    let Some(typedef) = schema.typedefs.get(member.name) else {
        return false;
    };
    if typedef.nullable {
        return true;
    }
    depth > 0
        && typedef
            .ty
            .refs()
            .any(|r| includes_nullable(schema, r, depth - 1))
}

#[cfg(test)]
mod tests {
    use typedefgen_schema::parse_schema;

    use super::*;

    fn check(src: &str) -> Vec<Diagnostic> {
        let schema = parse_schema(src, "typedefs.toml").unwrap();
        let mut diagnostics = Vec::new();
        NullableMembersLint.check(&schema, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_single_nullable_member_passes() {
        let diagnostics = check(
            r#"
            [[unions]]
            members = ["Blob", "String?"]
            "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_two_nullable_members() {
        let diagnostics = check(
            r#"
            [[unions]]
            members = ["Blob?", "String?"]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("unions[0]"));
    }

    #[test]
    fn test_nullable_union_with_nullable_member() {
        let diagnostics = check(
            r#"
            [typedefs.A]
            type = ["Blob", "String?"]
            nullable = true
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'String'"));
    }

    #[test]
    fn test_nullable_through_typedef() {
        let diagnostics = check(
            r#"
            [typedefs.MaybeName]
            type = "String"
            nullable = true

            [typedefs.Other]
            type = "MaybeName"

            [[unions]]
            members = ["Other", "Blob?"]
            "#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Other, Blob"));
    }
}
