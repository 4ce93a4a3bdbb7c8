//! Target-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for target language generators.
///
/// A generator receives the computed declarations of every component and
/// assembles them into one file per component.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "cpp")
    fn language(&self) -> &'static str;

    /// File extension for generated files (e.g., "h")
    fn file_extension(&self) -> &'static str;

    /// Render every file in memory without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Render every file, then write them into the output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<String>,
    /// Files that already had identical content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of files produced.
    pub fn file_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
