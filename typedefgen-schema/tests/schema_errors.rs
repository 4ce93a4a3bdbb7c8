//! Parse-time rejection of malformed typedefs.toml files.

use std::str::FromStr;

use typedefgen_schema::{Error, Schema, TypeExpr, parse_schema};

fn parse_err(src: &str) -> Box<Error> {
    parse_schema(src, "typedefs.toml").expect_err("schema should be rejected")
}

#[test]
fn test_full_schema() {
    let schema = Schema::from_str(
        r#"
        [generator]
        namespace = "blink"
        basename = "v8_typedefs"
        license = ["Copyright Example"]
        includes = ["third_party/blink/renderer/platform/heap/garbage_collected.h"]

        [components]
        base = "core"
        extended = "modules"

        [typedefs.BodyInit]
        type = ["Blob", "FormData", "String"]

        [typedefs.XMLHttpRequestBodyInit]
        type = "BodyInit"
        nullable = true
        components = ["core", "modules"]

        [[unions]]
        members = ["BodyInit", "Long?"]
        components = ["modules"]
        "#,
    )
    .unwrap();

    assert_eq!(schema.generator.license, vec!["Copyright Example"]);
    assert_eq!(schema.generator.includes.len(), 1);
    assert_eq!(schema.typedefs.len(), 2);
    assert!(schema.typedefs["XMLHttpRequestBodyInit"].nullable);
    assert_eq!(
        schema.typedefs["XMLHttpRequestBodyInit"].ty,
        TypeExpr::Single("BodyInit".into())
    );
    assert_eq!(schema.unions[0].components, vec!["modules"]);
}

#[test]
fn test_toml_syntax_error_has_span() {
    let err = parse_err("[typedefs.A\ntype = \"String\"");
    match *err {
        Error::Parse { span, .. } => assert!(span.is_some()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = parse_err(
        r#"
        [typedefs.A]
        type = "String"
        nulable = true
        "#,
    );
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_single_member_union() {
    let err = parse_err(
        r#"
        [typedefs.A]
        type = ["String"]
        "#,
    );
    assert!(matches!(
        *err,
        Error::TooFewMembers { count: 1, ref entity, .. } if entity == "typedef 'A'"
    ));
}

#[test]
fn test_single_member_union_usage() {
    let err = parse_err(
        r#"
        [[unions]]
        members = ["Blob"]
        "#,
    );
    assert!(matches!(
        *err,
        Error::TooFewMembers { count: 1, ref entity, .. } if entity == "union #1"
    ));
}

#[test]
fn test_keyword_typedef_name() {
    let err = parse_err(
        r#"
        [typedefs.union]
        type = "String"
        "#,
    );
    assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "union"));
}

#[test]
fn test_invalid_member_name() {
    let err = parse_err(
        r#"
        [[unions]]
        members = ["Blob", "sequence<long>"]
        "#,
    );
    assert!(matches!(
        *err,
        Error::InvalidIdentifier { ref name, .. } if name == "sequence<long>"
    ));
}

#[test]
fn test_unknown_component_names_entity() {
    let err = parse_err(
        r#"
        [typedefs.A]
        type = "String"
        components = ["extensions"]
        "#,
    );
    match *err {
        Error::UnknownComponent {
            component,
            entity,
            base,
            extended,
            span,
            ..
        } => {
            assert_eq!(component, "extensions");
            assert_eq!(entity, "typedef 'A'");
            assert_eq!(base, "core");
            assert_eq!(extended, "modules");
            assert!(span.is_some());
        }
        other => panic!("expected unknown component, got {other:?}"),
    }
}

#[test]
fn test_custom_component_names() {
    let schema = parse_schema(
        r#"
        [components]
        base = "platform"
        extended = "extensions"

        [typedefs.A]
        type = ["Blob", "String"]
        components = ["extensions"]
        "#,
        "typedefs.toml",
    )
    .unwrap();

    assert_eq!(schema.components.base, "platform");
}

#[test]
fn test_cycle_through_union_usage_is_not_followed() {
    // Union usages are not aliases and cannot form cycles.
    let schema = parse_schema(
        r#"
        [typedefs.A]
        type = ["Blob", "String"]

        [[unions]]
        members = ["A", "Long"]

        [[unions]]
        members = ["A", "Long"]
        "#,
        "typedefs.toml",
    )
    .unwrap();

    assert_eq!(schema.unions.len(), 2);
}

#[test]
fn test_missing_file() {
    let err = Schema::from_file("/nonexistent/typedefs.toml").unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_member_type_may_spell_a_keyword() {
    let schema = parse_schema(
        r#"
        [typedefs.LongOrString]
        type = ["long", "String"]

        [[unions]]
        members = ["double", "LongOrString"]
        "#,
        "typedefs.toml",
    )
    .unwrap();

    assert_eq!(
        schema.typedefs["LongOrString"].ty,
        TypeExpr::Union(vec!["long".into(), "String".into()])
    );
    assert_eq!(schema.unions[0].members, vec!["double", "LongOrString"]);
}
