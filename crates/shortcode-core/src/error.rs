//! Error types for registry construction and tag expansion.

/// Registry construction failure.
///
/// Raised by [`RegistryBuilder::build`](crate::RegistryBuilder::build) after
/// the last alterer has run. The whole build fails; there is no partial
/// registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A final entry lacks one or more required descriptor fields.
    #[error("invalid descriptor for tag `{name}`: missing {}", .missing.join(", "))]
    InvalidDescriptor {
        /// Registry key of the incomplete descriptor.
        name: String,
        /// Required fields that were absent after the alterer pass.
        missing: Vec<&'static str>,
    },
}

/// Failure raised by a tag's expander for a single occurrence.
///
/// Expanders pick the variant that describes the problem; the engine wraps
/// whatever they return in an [`ExpansionError`] together with the tag name.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExpandError {
    /// A required attribute was not supplied.
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),

    /// An attribute was supplied with an unusable value.
    #[error("invalid value for attribute `{attribute}`: {message}")]
    InvalidAttribute {
        /// Attribute key as the expander's allow-list names it.
        attribute: &'static str,
        /// What was wrong with the value.
        message: String,
    },

    /// Free-form expander failure.
    #[error("{0}")]
    Message(String),

    /// Failure from an underlying operation of a custom expander.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ExpandError {
    /// Create a free-form failure message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// Expansion failure tied to a specific tag occurrence.
///
/// The caller decides the policy: abort the render, or substitute the raw
/// markup for this occurrence and continue (see
/// [`expand_or_keep`](crate::expand_or_keep)).
#[derive(Debug, thiserror::Error)]
#[error("expansion of tag `{tag}` failed: {source}")]
pub struct ExpansionError {
    /// Name of the tag whose expander failed.
    pub tag: String,
    /// The expander's own error.
    pub source: ExpandError,
}
