//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    pub config_path: PathBuf,
    pub schema: SchemaInfo,
    pub phases: Vec<PhaseInfo>,
    pub lints: Vec<LintInfo>,
    /// Aliases in the lowered database.
    pub aliases: usize,
    /// Union specializations in the lowered database.
    pub specializations: usize,
    /// One entry per component, base first.
    pub components: Vec<ComponentAnalysis>,
}

/// Information extracted from the schema file.
#[derive(Debug)]
pub struct SchemaInfo {
    pub namespace: String,
    pub class_prefix: String,
    /// Entries of the `[typedefs]` table.
    pub typedefs: usize,
    /// Entries of the `[[unions]]` array.
    pub unions: usize,
}

#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

/// What one component's header will contain.
#[derive(Debug)]
pub struct ComponentAnalysis {
    pub component: String,
    /// Header path relative to the output root.
    pub header: String,
    pub aliases: usize,
    pub unions: usize,
    pub typedef_renames: usize,
    pub union_renames: usize,
    pub forward_decls: usize,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("typedefgen Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Namespace", &self.schema.namespace);
        out.key_value_indented("Class prefix", &self.schema.class_prefix);
        out.key_value_indented("Typedefs", &self.schema.typedefs.to_string());
        out.key_value_indented("Unions", &self.schema.unions.to_string());
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section("Analysis Results");
        out.key_value_indented("Aliases", &self.aliases.to_string());
        out.key_value_indented("Union specializations", &self.specializations.to_string());
        out.newline();

        for c in &self.components {
            out.section(&format!("Component '{}' ({})", c.component, c.header));
            out.key_value_indented(
                "Entities",
                &format!("{} aliases, {} unions", c.aliases, c.unions),
            );
            out.key_value_indented("Typedefs to unions", &c.typedef_renames.to_string());
            out.key_value_indented(
                "Unions including aliased member types",
                &c.union_renames.to_string(),
            );
            out.key_value_indented("Forward declarations", &c.forward_decls.to_string());
            out.newline();
        }
    }
}
