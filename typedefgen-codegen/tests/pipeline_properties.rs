//! End-to-end properties of the validate -> lower -> analyze pipeline.

use typedefgen_codegen::{
    ComputedData, Error,
    naming::canonical_name,
    pipeline::{CompilationContext, Pipeline},
};
use typedefgen_ir::Tier;
use typedefgen_schema::parse_schema;

const MIXED: &str = r#"
[typedefs.Name]
type = "String"

[typedefs.BlobOrName]
type = ["Blob", "Name"]

[typedefs.Gpu]
type = ["GPUBuffer", "GPUTexture"]
components = ["modules"]

[typedefs.GpuOrName]
type = ["Gpu", "Name"]
components = ["modules"]

[[unions]]
members = ["BlobOrName", "Long"]
components = ["core", "modules"]

[[unions]]
members = ["Gpu", "Long"]
nullable = true
components = ["modules"]
"#;

fn run(src: &str) -> CompilationContext {
    let schema = parse_schema(src, "typedefs.toml").expect("test schema should parse");
    Pipeline::new().run(schema).expect("pipeline should succeed")
}

fn computed(ctx: &CompilationContext) -> &ComputedData {
    ctx.computed.as_ref().expect("analyze should have run")
}

#[test]
fn test_runs_are_deterministic() {
    let first = serde_json::to_string(computed(&run(MIXED))).unwrap();
    let second = serde_json::to_string(computed(&run(MIXED))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_entity_lands_in_exactly_one_component() {
    let ctx = run(MIXED);
    let db = ctx.database().unwrap();
    let computed = computed(&ctx);

    let aliases: usize = computed.components.iter().map(|c| c.alias_count).sum();
    let unions: usize = computed.components.iter().map(|c| c.union_count).sum();

    assert_eq!(aliases, db.alias_count());
    assert_eq!(unions, db.union_count());
}

#[test]
fn test_base_output_never_names_extended_only_classes() {
    let ctx = run(MIXED);
    let db = ctx.database().unwrap();
    let prefix = &ctx.schema.generator.class_prefix;

    let extended_only: Vec<String> = db
        .unions()
        .filter(|u| u.components.is_extended_only())
        .map(|u| canonical_name(prefix, u))
        .collect();
    assert!(!extended_only.is_empty());

    let base = computed(&ctx).component(Tier::Base).unwrap();
    for rename in base.declarations.renames() {
        assert!(!extended_only.contains(&rename.canonical), "{rename}");
    }
    for class in base.declarations.forward_decls.iter() {
        assert!(!extended_only.iter().any(|c| c == class), "{class}");
    }
}

#[test]
fn test_shared_union_is_owned_by_extended() {
    let ctx = run(MIXED);
    let computed = computed(&ctx);
    let base = computed.component(Tier::Base).unwrap();
    let extended = computed.component(Tier::Extended).unwrap();

    let base_renames: Vec<String> = base.declarations.renames().map(|r| r.to_string()).collect();
    let extended_renames: Vec<String> = extended
        .declarations
        .renames()
        .map(|r| r.to_string())
        .collect();

    assert_eq!(
        base_renames,
        vec![
            "using BlobOrName = V8UnionBlobOrString;",
            "using V8UnionBlobOrName = V8UnionBlobOrString;",
        ]
    );
    assert_eq!(
        extended_renames,
        vec![
            "using Gpu = V8UnionGPUBufferOrGPUTexture;",
            "using GpuOrName = V8UnionGPUBufferOrGPUTextureOrString;",
            "using V8UnionBlobOrNameOrLong = V8UnionBlobOrLongOrString;",
            "using V8UnionGpuOrLongOrNull = V8UnionGPUBufferOrGPUTextureOrLongOrNull;",
            "using V8UnionGpuOrName = V8UnionGPUBufferOrGPUTextureOrString;",
        ]
    );
}

#[test]
fn test_dedup_law() {
    let ctx = run(
        r#"
        [typedefs.Text]
        type = "String"

        [typedefs.Words]
        type = "Text"

        [[unions]]
        members = ["Text", "Blob"]

        [[unions]]
        members = ["Blob", "Text"]

        [[unions]]
        members = ["Words", "Blob"]
        "#,
    );

    let base = computed(&ctx).component(Tier::Base).unwrap();
    assert_eq!(base.declarations.forward_decls.len(), 1);
    assert_eq!(
        base.declarations
            .union_renames
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>(),
        vec![
            "using V8UnionBlobOrText = V8UnionBlobOrString;",
            "using V8UnionBlobOrWords = V8UnionBlobOrString;",
        ]
    );
}

#[test]
fn test_typedef_named_like_a_synthesized_rename_collides() {
    let schema = parse_schema(
        r#"
        [typedefs.Name]
        type = "String"

        [typedefs.V8UnionBlobOrName]
        type = ["Blob", "Long"]

        [[unions]]
        members = ["Blob", "Name"]
        "#,
        "typedefs.toml",
    )
    .unwrap();

    let err = Pipeline::new().run(schema).unwrap_err();

    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::NameCollision {
            name: "V8UnionBlobOrName".into(),
            first: "V8UnionBlobOrLong".into(),
            second: "V8UnionBlobOrString".into(),
        })
    );
}

#[test]
fn test_documented_schema_runs_end_to_end() {
    let ctx = run(
        r#"
        [generator]
        namespace = "blink"
        basename = "v8_typedefs"
        path = "bindings/{component}/v8"
        class_prefix = "V8Union"
        license = ["Copyright ...", "..."]
        includes = ["third_party/blink/renderer/platform/heap/member.h"]

        [components]
        base = "core"
        extended = "modules"

        [typedefs.BlobOrString]
        type = ["Blob", "String"]
        nullable = false
        components = ["core"]

        [typedefs.Name]
        type = "USVString?"

        [[unions]]
        members = ["BlobOrString", "Name", "long"]
        components = ["modules"]
        "#,
    );
    let computed = computed(&ctx);

    let base: Vec<String> = computed
        .component(Tier::Base)
        .unwrap()
        .declarations
        .renames()
        .map(|r| r.to_string())
        .collect();
    let extended: Vec<String> = computed
        .component(Tier::Extended)
        .unwrap()
        .declarations
        .renames()
        .map(|r| r.to_string())
        .collect();

    assert_eq!(base, vec!["using BlobOrString = V8UnionBlobOrString;"]);
    assert_eq!(
        extended,
        vec![
            "using V8UnionBlobOrStringOrNameOrlongOrNull = \
             V8UnionBlobOrStringOrUSVStringOrlongOrNull;"
        ]
    );
}
