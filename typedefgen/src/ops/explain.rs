//! Explain operation - pipeline explanation.

use std::path::Path;

use eyre::{Result, eyre};
use typedefgen_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use typedefgen_schema::Schema;

use super::compile;
use crate::reports::{ComponentAnalysis, ExplainReport, LintInfo, PhaseInfo, SchemaInfo};

/// Execute the explain operation.
///
/// Runs the pipeline and returns what each phase does and what each
/// component's header will contain.
pub fn explain(schema: &Schema, config_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let ctx = compile(&pipeline, schema)?;
    let computed = ctx
        .computed
        .as_ref()
        .ok_or_else(|| eyre!("computed data not set - did AnalyzePhase run?"))?;

    let components = computed
        .components
        .iter()
        .map(|c| ComponentAnalysis {
            component: c.component.clone(),
            header: schema.generator.header_path(&c.component),
            aliases: c.alias_count,
            unions: c.union_count,
            typedef_renames: c.declarations.typedef_renames.len(),
            union_renames: c.declarations.union_renames.len(),
            forward_decls: c.declarations.forward_decls.len(),
        })
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        schema: SchemaInfo {
            namespace: schema.generator.namespace.clone(),
            class_prefix: schema.generator.class_prefix.clone(),
            typedefs: schema.typedefs.len(),
            unions: schema.unions.len(),
        },
        phases,
        lints,
        aliases: computed.alias_count,
        specializations: computed.union_count,
        components,
    })
}
