//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Outcome of `typedefgen check`.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Total rename declarations, when the pipeline ran to completion.
    pub rename_count: Option<usize>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let loud = self.errors.iter().map(|m| ("error", m));
        let loud = loud.chain(self.warnings.iter().map(|m| ("warning", m)));
        for (level, message) in loud {
            out.diagnostic(&format!("{level}: {message}"));
        }
        for message in &self.infos {
            out.preformatted(&format!("info: {message}"));
        }

        if !(self.errors.is_empty() && self.warnings.is_empty()) {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        if let Some(count) = self.rename_count {
            out.key_value_indented("Rename declarations", &count.to_string());
        }
    }
}
