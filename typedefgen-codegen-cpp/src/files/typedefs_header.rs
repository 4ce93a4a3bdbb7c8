use std::path::{Path, PathBuf};

use typedefgen_codegen::{ComponentOutput, builder::CodeBuilder};
use typedefgen_core::{FileRules, GeneratedFile};
use typedefgen_schema::GeneratorConfig;

use crate::{ClassDecl, Include, IncludeGuard, Namespace, Section, Using};

pub const TYPEDEFS_SECTION: &str = "Typedefs to unions";
pub const UNION_ALIASES_SECTION: &str = "Unions including aliased member types";

/// The per-component header of rename declarations.
pub struct TypedefsHeader<'a> {
    config: &'a GeneratorConfig,
    output: &'a ComponentOutput,
}

impl<'a> TypedefsHeader<'a> {
    pub fn new(config: &'a GeneratorConfig, output: &'a ComponentOutput) -> Self {
        Self { config, output }
    }

    /// Path relative to the output root, `/`-separated.
    pub fn relative_path(&self) -> String {
        self.config.header_path(&self.output.component)
    }
}

impl GeneratedFile for TypedefsHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let declarations = &self.output.declarations;
        let guard = IncludeGuard::for_path(&self.relative_path());
        let mut builder = CodeBuilder::new();

        if !self.config.license.is_empty() {
            for line in &self.config.license {
                builder.push_comment(line);
            }
            builder.push_blank();
        }

        builder.apply_fragment(guard.open());
        builder.push_blank();

        if !self.config.includes.is_empty() {
            for include in &self.config.includes {
                builder.emit(&Include::new(include));
            }
            builder.push_blank();
        }

        let mut namespace = Namespace::new(&self.config.namespace);
        if !declarations.forward_decls.is_empty() {
            for class in declarations.forward_decls.iter() {
                namespace = namespace.push(&ClassDecl::new(class));
            }
            namespace = namespace.blank();
        }
        let namespace = namespace
            .push(
                &Section::new(TYPEDEFS_SECTION)
                    .entries(declarations.typedef_renames.iter().map(Using::from)),
            )
            .blank()
            .push(
                &Section::new(UNION_ALIASES_SECTION)
                    .entries(declarations.union_renames.iter().map(Using::from)),
            )
            .blank();

        builder.emit(&namespace);
        builder.push_blank();
        builder.apply_fragment(guard.close());
        builder.build()
    }
}
