use thiserror::Error;

/// Fatal conditions raised while building or emitting declarations.
///
/// These travel inside an [`eyre::Report`] out of the pipeline; callers can
/// recover the variant with `report.downcast_ref::<Error>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("schema inconsistency: {0}")]
    SchemaInconsistency(String),

    #[error("name collision: '{name}' is synthesized for both '{first}' and '{second}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("missing binding: no union specialization '{union}' for '{referrer}'")]
    MissingBinding { union: String, referrer: String },

    #[error(
        "layering violation: '{declaration}' in the {component} component names '{class}', which only the extended component owns"
    )]
    LayeringViolation {
        component: String,
        declaration: String,
        class: String,
    },
}

impl Error {
    pub(crate) fn inconsistency(message: impl Into<String>) -> Self {
        Self::SchemaInconsistency(message.into())
    }
}
