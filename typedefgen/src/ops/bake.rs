//! Bake operation - header generation from the schema.

use std::path::Path;

use eyre::{Context, Result};
use tracing::debug;
use typedefgen_codegen::{
    ComputedData,
    pipeline::{Pipeline, SnapshotPlugin},
};
use typedefgen_codegen_cpp::{Generator, LanguageCodegen};
use typedefgen_schema::Schema;

use super::compile;
use crate::reports::{
    BakeReport, ComponentSummary, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Directory (under the output root) that `--visualize` snapshots go to.
pub const DEBUG_DIR: &str = ".typedefgen/debug";

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output root for generated headers.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the bake operation.
///
/// Runs the pipeline on the schema and renders one header per component.
pub fn bake(schema: &Schema, opts: BakeOptions) -> Result<BakeReport> {
    let debug_dir = opts.output_dir.join(DEBUG_DIR);
    debug!(
        output = %opts.output_dir.display(),
        dry_run = opts.dry_run,
        visualize = opts.visualize,
        "baking headers"
    );

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = compile(&pipeline, schema)?;

    let warnings: Vec<String> = ctx.warnings().map(ToString::to_string).collect();
    let generator = Generator::from_context(&ctx)?;
    let components = ctx
        .computed
        .as_ref()
        .map(summarize)
        .unwrap_or_default();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write headers")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            unchanged: generated.unchanged,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(BakeReport {
        warnings,
        components,
        result,
    })
}

fn summarize(computed: &ComputedData) -> Vec<ComponentSummary> {
    computed
        .components
        .iter()
        .map(|c| ComponentSummary {
            component: c.component.clone(),
            renames: c.declarations.rename_count(),
            forward_decls: c.declarations.forward_decls.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use typedefgen_schema::parse_schema;

    use super::*;

    const SCHEMA: &str = r#"
        [typedefs.A]
        type = ["Blob", "String"]

        [typedefs.body_init]
        type = ["Blob", "Long"]
    "#;

    fn schema() -> Schema {
        parse_schema(SCHEMA, "typedefs.toml").unwrap()
    }

    #[test]
    fn test_bake_writes_headers() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            &schema(),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: false,
                visualize: false,
            },
        )
        .unwrap();

        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written.len(), 2);
        assert!(written.debug_dir.is_none());
        assert!(temp.path().join("bindings/core/v8/v8_typedefs.h").exists());
        assert_eq!(report.components[0].renames, 2);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = bake(
            &schema(),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: true,
                visualize: false,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected preview result");
        };
        assert_eq!(preview.files.len(), 2);
        assert!(!temp.path().join("bindings").exists());
    }

    #[test]
    fn test_visualize_writes_snapshots() {
        let temp = TempDir::new().unwrap();
        bake(
            &schema(),
            BakeOptions {
                output_dir: temp.path(),
                dry_run: false,
                visualize: true,
            },
        )
        .unwrap();

        let debug_dir = temp.path().join(DEBUG_DIR);
        for phase in ["validate", "lower", "analyze"] {
            assert!(debug_dir.join(format!("{phase}.json")).exists());
        }
    }

    #[test]
    fn test_lint_errors_fail_bake() {
        let temp = TempDir::new().unwrap();
        let schema = parse_schema(
            r#"
            [typedefs.A]
            type = ["Blob?", "String?"]
            "#,
            "typedefs.toml",
        )
        .unwrap();

        let err = bake(
            &schema,
            BakeOptions {
                output_dir: temp.path(),
                dry_run: false,
                visualize: false,
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("nullable-members"));
        assert!(!temp.path().join("bindings").exists());
    }
}
