//! Declarations inside the namespace body.

use typedefgen_codegen::{
    builder::{CodeFragment, Renderable},
    emit::Rename,
};

/// Forward declaration, `class Name;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    name: String,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for ClassDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("class {};", self.name))]
    }
}

/// Type alias, `using Name = Target;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Using {
    name: String,
    target: String,
}

impl Using {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

impl From<&Rename> for Using {
    fn from(rename: &Rename) -> Self {
        Self::new(&rename.name, &rename.canonical)
    }
}

impl Renderable for Using {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "using {} = {};",
            self.name, self.target
        ))]
    }
}

#[cfg(test)]
mod tests {
    use typedefgen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_class_decl() {
        let mut builder = CodeBuilder::new();
        builder.emit(&ClassDecl::new("V8UnionBlobOrString"));
        assert_eq!(builder.build(), "class V8UnionBlobOrString;\n");
    }

    #[test]
    fn test_using_matches_rename_text() {
        let rename = Rename::new("V8UnionBlobOrName", "V8UnionBlobOrString");
        let mut builder = CodeBuilder::new();
        builder.emit(&Using::from(&rename));
        assert_eq!(builder.build(), format!("{}\n", rename));
    }
}
