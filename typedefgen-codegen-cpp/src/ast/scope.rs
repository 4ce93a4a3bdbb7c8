//! Namespaces and commented declaration sections.

use typedefgen_codegen::builder::{CodeFragment, Renderable};

/// `namespace name { ... }  // namespace name`
///
/// The body is not indented, matching Chromium style.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    name: String,
    body: Vec<CodeFragment>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    /// Append a node to the body.
    pub fn push(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Append a blank line to the body.
    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }
}

impl Renderable for Namespace {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::line(format!("namespace {} {{", self.name)),
            CodeFragment::blank(),
        ];
        fragments.extend(self.body.iter().cloned());
        fragments.push(CodeFragment::line(format!("}}  // namespace {}", self.name)));
        fragments
    }
}

/// A `//` marker comment followed by its lines.
///
/// The marker is written even when the section has no entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    title: String,
    entries: Vec<CodeFragment>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.entries.extend(node.to_fragments());
        }
        self
    }
}

impl Renderable for Section {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::comment(&self.title)];
        fragments.extend(self.entries.iter().cloned());
        fragments
    }
}
