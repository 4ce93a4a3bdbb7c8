//! Bake command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from header generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Rendered warning diagnostics.
    pub warnings: Vec<String>,
    /// Per-component declaration counts, base first.
    pub components: Vec<ComponentSummary>,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub struct ComponentSummary {
    pub component: String,
    pub renames: usize,
    pub forward_decls: usize,
}

/// Result of header generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Headers whose content changed.
    pub written: Vec<String>,
    /// Headers that already had identical content.
    pub unchanged: Vec<String>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.diagnostic(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        out.section("Components");
        for c in &self.components {
            out.list_item(&format!(
                "{}: {} rename{}, {} forward declaration{}",
                c.component,
                c.renames,
                plural(c.renames),
                c.forward_decls,
                plural(c.forward_decls)
            ));
        }
        out.newline();

        out.key_value("Output", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(path);
        }
        if !written.unchanged.is_empty() {
            out.preformatted(&format!(
                "  {} header{} unchanged",
                written.unchanged.len(),
                plural(written.unchanged.len())
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} header{} would be generated",
            preview.files.len(),
            plural(preview.files.len())
        ));
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
