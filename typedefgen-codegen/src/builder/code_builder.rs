//! Code builder for line-oriented generated files.

use super::{CodeFragment, Renderable};

/// Buffer that generated files are rendered into.
///
/// # Example
///
/// ```
/// use typedefgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_comment("Typedefs to unions")
///     .push_line("using A = V8UnionBlobOrString;");
///
/// assert_eq!(
///     builder.build(),
///     "// Typedefs to unions\nusing A = V8UnionBlobOrString;\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//` comment line; an empty comment renders as a bare `//`.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.buffer.push_str("//\n");
        } else {
            self.buffer.push_str("// ");
            self.buffer.push_str(text);
            self.buffer.push('\n');
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Comment(s) => {
                self.push_comment(&s);
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_api() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("namespace blink {")
            .push_blank()
            .push_line("}  // namespace blink");
        assert_eq!(builder.build(), "namespace blink {\n\n}  // namespace blink\n");
    }

    #[test]
    fn test_empty_comment() {
        let mut builder = CodeBuilder::new();
        builder.push_comment("");
        assert_eq!(builder.as_str(), "//\n");
    }

    #[test]
    fn test_nested_sequence() {
        let mut builder = CodeBuilder::new();
        builder.apply_fragment(CodeFragment::sequence(vec![
            CodeFragment::comment("a"),
            CodeFragment::sequence(vec![CodeFragment::line("b"), CodeFragment::blank()]),
        ]));
        assert_eq!(builder.build(), "// a\nb\n\n");
    }
}
