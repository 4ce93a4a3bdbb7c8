use std::path::Path;

use eyre::{Result, eyre};
use tracing::{debug, info};
use typedefgen_codegen::{
    ComputedData,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use typedefgen_core::{File, GeneratedFile, WriteResult};
use typedefgen_schema::GeneratorConfig;

use crate::files::TypedefsHeader;

/// C++ generator that produces one typedefs header per component.
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    computed: &'a ComputedData,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.headers()
            .map(|header| PreviewFile {
                path: header.relative_path(),
                content: header.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Render everything before touching the filesystem
        let files: Vec<(String, File)> = self
            .headers()
            .map(|header| {
                let file = File::new(header.path(output_dir), header.render())
                    .with_rules(header.rules());
                (header.relative_path(), file)
            })
            .collect();

        let mut result = GenerateResult::default();
        for (path, file) in files {
            match file.write()? {
                WriteResult::Written => {
                    info!(%path, "wrote header");
                    result.written.push(path);
                }
                WriteResult::Unchanged | WriteResult::Skipped => {
                    debug!(%path, "header unchanged");
                    result.unchanged.push(path);
                }
            }
        }
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GeneratorConfig, computed: &'a ComputedData) -> Self {
        Self { config, computed }
    }

    /// Build a generator from a context the pipeline has fully run on.
    pub fn from_context(ctx: &'a CompilationContext) -> Result<Self> {
        let computed = ctx
            .computed
            .as_ref()
            .ok_or_else(|| eyre!("computed data not set - did AnalyzePhase run?"))?;
        Ok(Self::new(&ctx.schema.generator, computed))
    }

    fn headers(&self) -> impl Iterator<Item = TypedefsHeader<'a>> {
        let config = self.config;
        self.computed
            .components
            .iter()
            .map(move |output| TypedefsHeader::new(config, output))
    }
}
