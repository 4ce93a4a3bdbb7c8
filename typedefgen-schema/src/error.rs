use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The schema text and its file name, attached to every located error.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    fn wrap(&self, build: impl FnOnce(NamedSource<String>) -> Error) -> Box<Error> {
        Box::new(build(self.named_source()))
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        self.wrap(|src| Error::Parse { src, span, source })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let message = message.into();
        self.wrap(|src| Error::Validation { src, span, message })
    }

    /// `known` is the (base, extended) pair of accepted component names.
    pub fn unknown_component_error(
        &self,
        component: impl Into<String>,
        entity: impl Into<String>,
        known: (&str, &str),
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (base, extended) = (known.0.to_string(), known.1.to_string());
        let (component, entity) = (component.into(), entity.into());
        self.wrap(|src| Error::UnknownComponent {
            src,
            span,
            component,
            entity,
            base,
            extended,
        })
    }

    pub fn too_few_members_error(
        &self,
        entity: impl Into<String>,
        count: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let entity = entity.into();
        self.wrap(|src| Error::TooFewMembers {
            src,
            span,
            entity,
            count,
        })
    }

    /// `cycle` lists the typedef names in visiting order, first name repeated last.
    pub fn alias_cycle_error(&self, cycle: &[&str], span: Option<SourceSpan>) -> Box<Error> {
        let cycle = cycle.join(" -> ");
        self.wrap(|src| Error::AliasCycle { src, span, cycle })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context) = (name.into(), context.into());
        self.wrap(|src| Error::ReservedKeyword {
            src,
            span,
            name,
            context,
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context, reason) = (name.into(), context.into(), reason.into());
        self.wrap(|src| Error::InvalidIdentifier {
            src,
            span,
            name,
            context,
            reason,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'typedefgen init' to create a starter typedefs.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse typedefs.toml")]
    #[diagnostic(code(typedefgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{entity} references unknown component '{component}'")]
    #[diagnostic(
        code(typedefgen::unknown_component),
        help("components must be '{base}' or '{extended}'")
    )]
    UnknownComponent {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a recognized component")]
        span: Option<SourceSpan>,
        component: String,
        entity: String,
        base: String,
        extended: String,
    },

    #[error("{entity} is a union with {count} member type(s)")]
    #[diagnostic(
        code(typedefgen::too_few_members),
        help("a union needs at least two member types")
    )]
    TooFewMembers {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        entity: String,
        count: usize,
    },

    #[error("typedef cycle: {cycle}")]
    #[diagnostic(
        code(typedefgen::alias_cycle),
        help("a typedef cannot refer back to itself through other typedefs")
    )]
    AliasCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        cycle: String,
    },

    #[error("{message}")]
    #[diagnostic(code(typedefgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{context} '{name}' collides with a C++ keyword")]
    #[diagnostic(
        code(typedefgen::reserved_keyword),
        help("the generated `using {name} = ...;` would not compile, pick another name")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("keyword")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("{context} name '{name}' is not a C++ identifier")]
    #[diagnostic(code(typedefgen::invalid_identifier), help("{reason}"))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
