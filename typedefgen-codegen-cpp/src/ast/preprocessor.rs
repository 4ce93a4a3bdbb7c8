//! Preprocessor directives.

use typedefgen_codegen::builder::{CodeFragment, Renderable};

/// `#include "path"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    path: String,
}

impl Include {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderable for Include {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("#include \"{}\"", self.path))]
    }
}

/// The `#ifndef`/`#define` ... `#endif` pair around a header.
///
/// The guard wraps content that is emitted between [`IncludeGuard::open`]
/// and [`IncludeGuard::close`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeGuard {
    symbol: String,
}

impl IncludeGuard {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Guard derived from the header's path relative to the output root.
    pub fn for_path(path: &str) -> Self {
        Self::new(typedefgen_core::to_header_guard(path))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn open(&self) -> CodeFragment {
        CodeFragment::sequence(vec![
            CodeFragment::line(format!("#ifndef {}", self.symbol)),
            CodeFragment::line(format!("#define {}", self.symbol)),
        ])
    }

    pub fn close(&self) -> CodeFragment {
        CodeFragment::line(format!("#endif  // {}", self.symbol))
    }
}

#[cfg(test)]
mod tests {
    use typedefgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_include() {
        let mut builder = CodeBuilder::new();
        builder.emit(&Include::new("bindings/core/v8/v8_union_blob_or_string.h"));
        assert_eq!(
            builder.build(),
            "#include \"bindings/core/v8/v8_union_blob_or_string.h\"\n"
        );
    }

    #[test]
    fn test_include_guard() {
        let guard = IncludeGuard::for_path("bindings/core/v8/v8_typedefs.h");
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(guard.open());
        builder.apply_fragment(guard.close());

        assert_eq!(
            builder.build(),
            "#ifndef BINDINGS_CORE_V8_V8_TYPEDEFS_H_\n\
             #define BINDINGS_CORE_V8_V8_TYPEDEFS_H_\n\
             #endif  // BINDINGS_CORE_V8_V8_TYPEDEFS_H_\n"
        );
    }
}
