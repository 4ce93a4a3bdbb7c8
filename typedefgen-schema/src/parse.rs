//! Schema parsing from files and strings.

use std::{collections::BTreeMap, path::Path, str::FromStr};

use crate::{
    Error, Result, Schema, TypeExpr,
    schema::{ComponentsConfig, TypeRef},
    validate::ParseContext,
};

const DEFAULT_FILENAME: &str = "typedefs.toml";

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, DEFAULT_FILENAME)
    }
}

impl Schema {
    /// Parse a typedefs.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let ctx = ParseContext::new(content, filename);
    let schema: Schema =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
    validate_schema(&schema, &ctx)?;
    Ok(schema)
}

/// Validate the schema after parsing.
fn validate_schema(schema: &Schema, ctx: &ParseContext<'_>) -> Result<()> {
    validate_generator(schema, ctx)?;
    validate_components_config(&schema.components, ctx)?;

    let typedefs_ctx = ctx.push("typedefs");
    for (name, typedef) in &schema.typedefs {
        ctx.validate_name(name, "typedef")?;

        let entity = format!("typedef '{}'", name);
        let typedef_ctx = typedefs_ctx.push(name);
        validate_type_expr(&typedef.ty, &entity, &typedef_ctx)?;
        validate_components(&typedef.components, &entity, &schema.components, ctx)?;
    }

    let unions_ctx = ctx.push("unions");
    for (index, union) in schema.unions.iter().enumerate() {
        let entity = format!("union #{}", index + 1);
        validate_type_expr(&union.as_type(), &entity, &unions_ctx)?;
        validate_components(&union.components, &entity, &schema.components, ctx)?;
    }

    detect_cycles(schema, ctx)
}

fn validate_generator(schema: &Schema, ctx: &ParseContext<'_>) -> Result<()> {
    let generator = &schema.generator;
    let generator_ctx = ctx.push("generator");

    for segment in generator.namespace.split("::") {
        generator_ctx.validate_name(segment, "namespace")?;
    }
    generator_ctx.validate_name(&generator.class_prefix, "class prefix")?;

    if generator.basename.is_empty() {
        return Err(ctx.source_context().validation_error(
            "generator.basename cannot be empty",
            ctx.find_span("basename"),
        ));
    }

    Ok(())
}

fn validate_components_config(
    components: &ComponentsConfig,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    if components.base.is_empty() || components.extended.is_empty() {
        return Err(ctx.source_context().validation_error(
            "component names cannot be empty",
            ctx.find_span("components"),
        ));
    }

    // Component names are substituted into output paths
    let components_ctx = ctx.push("components");
    components_ctx.validate_name(&components.base, "component")?;
    components_ctx.validate_name(&components.extended, "component")?;

    if components.base == components.extended {
        return Err(ctx.source_context().validation_error(
            format!(
                "base and extended components must differ (both are '{}')",
                components.base
            ),
            ctx.find_value_span(&components.extended),
        ));
    }

    Ok(())
}

fn validate_type_expr(ty: &TypeExpr, entity: &str, ctx: &ParseContext<'_>) -> Result<()> {
    if let TypeExpr::Union(members) = ty
        && members.len() < 2
    {
        let span = members.first().and_then(|m| ctx.find_value_span(m));
        return Err(ctx
            .source_context()
            .too_few_members_error(entity, members.len(), span));
    }

    for TypeRef { name, .. } in ty.refs() {
        ctx.validate_member_name(name)?;
    }

    Ok(())
}

fn validate_components(
    components: &[String],
    entity: &str,
    known: &ComponentsConfig,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    for component in components {
        if !known.is_known(component) {
            return Err(ctx.source_context().unknown_component_error(
                component,
                entity,
                (&known.base, &known.extended),
                ctx.find_value_span(component),
            ));
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Reject typedefs that reach themselves through other typedefs.
fn detect_cycles(schema: &Schema, ctx: &ParseContext<'_>) -> Result<()> {
    let mut state: BTreeMap<&str, Visit> = BTreeMap::new();
    let mut stack: Vec<&str> = Vec::new();

    for name in schema.typedefs.keys() {
        visit(schema, name, &mut state, &mut stack, ctx)?;
    }
    Ok(())
}

fn visit<'s>(
    schema: &'s Schema,
    name: &'s str,
    state: &mut BTreeMap<&'s str, Visit>,
    stack: &mut Vec<&'s str>,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    match state.get(name) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = stack.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<&str> = stack[start..].to_vec();
            cycle.push(name);
            return Err(ctx
                .source_context()
                .alias_cycle_error(&cycle, ctx.find_span(name)));
        }
        None => {}
    }

    let Some(typedef) = schema.typedefs.get(name) else {
        return Ok(());
    };

    state.insert(name, Visit::InProgress);
    stack.push(name);
    for target in schema.typedef_refs(&typedef.ty) {
        visit(schema, target, state, stack, ctx)?;
    }
    stack.pop();
    state.insert(name, Visit::Done);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let schema: Schema = r#"
            [typedefs.BodyInit]
            type = ["Blob", "FormData", "String"]
        "#
        .parse()
        .unwrap();

        assert_eq!(schema.typedefs.len(), 1);
        assert!(schema.unions.is_empty());
    }

    #[test]
    fn test_alias_chain_is_not_a_cycle() {
        let result = parse_schema(
            r#"
            [typedefs.A]
            type = ["Blob", "String"]

            [typedefs.B]
            type = "A"

            [typedefs.C]
            type = ["B", "Long"]
        "#,
            "typedefs.toml",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let err = parse_schema(
            r#"
            [typedefs.A]
            type = ["A", "String"]
        "#,
            "typedefs.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::AliasCycle { ref cycle, .. } if cycle == "A -> A"));
    }

    #[test]
    fn test_indirect_cycle() {
        let err = parse_schema(
            r#"
            [typedefs.A]
            type = "B"

            [typedefs.B]
            type = ["A", "Long"]
        "#,
            "typedefs.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::AliasCycle { ref cycle, .. } if cycle == "A -> B -> A"));
    }

    #[test]
    fn test_unknown_component() {
        let err = parse_schema(
            r#"
            [[unions]]
            members = ["Blob", "String"]
            components = ["platform"]
        "#,
            "typedefs.toml",
        )
        .unwrap_err();

        assert!(matches!(
            *err,
            Error::UnknownComponent { ref component, .. } if component == "platform"
        ));
    }

    #[test]
    fn test_same_base_and_extended() {
        let err = parse_schema(
            r#"
            [components]
            base = "core"
            extended = "core"
        "#,
            "typedefs.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_component_name_cannot_escape_output_dir() {
        let err = parse_schema(
            r#"
            [components]
            base = "../../x"
        "#,
            "typedefs.toml",
        )
        .unwrap_err();

        assert!(matches!(
            *err,
            Error::InvalidIdentifier { ref name, .. } if name == "../../x"
        ));
    }

    #[test]
    fn test_invalid_namespace_segment() {
        let err = parse_schema(
            r#"
            [generator]
            namespace = "blink::class"
        "#,
            "typedefs.toml",
        )
        .unwrap_err();

        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_nested_namespace_is_accepted() {
        let schema = parse_schema(
            r#"
            [generator]
            namespace = "blink::bindings"
        "#,
            "typedefs.toml",
        )
        .unwrap();
        assert_eq!(schema.generator.namespace, "blink::bindings");
    }
}
