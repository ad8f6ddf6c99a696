//! Tag descriptors: contributed drafts and their validated form.
//!
//! Providers contribute [`TagDescriptor`] drafts keyed by tag name; the
//! builder turns each surviving draft into a [`RegisteredTag`] once the
//! alterer pass is over. The split keeps the "every registered tag has an
//! expander" invariant in the type instead of in a runtime check at every
//! call site.

use std::fmt;
use std::sync::Arc;

use crate::attrs::AttrMap;
use crate::error::{ExpansionError, RegistryError};
use crate::expand::{Expand, ExpandContext};

/// Contributed description of one tag, prior to validation.
///
/// Every field is individually optional so alterers can fill gaps or blank
/// fields out; completeness is checked once, after the last alterer has run.
/// The tag name is not a field: it is the key of the map carrying the draft.
///
/// # Example
///
/// ```
/// use shortcode_core::TagDescriptor;
///
/// let draft = TagDescriptor::new()
///     .with_title("Example")
///     .with_syntax(r#"[example foo="x"]content[/example]"#);
/// assert!(draft.expander.is_none());
/// ```
#[derive(Clone, Default)]
pub struct TagDescriptor {
    /// Display title shown in editor menus and tag listings.
    pub title: Option<String>,
    /// Example usage shown in filter tips, e.g. `[quote]text[/quote]`.
    pub syntax: Option<String>,
    /// Expander invoked for each occurrence of the tag.
    pub expander: Option<Arc<dyn Expand>>,
}

impl TagDescriptor {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the syntax example.
    #[must_use]
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    /// Set the expander.
    #[must_use]
    pub fn with_expander<E: Expand + 'static>(mut self, expander: E) -> Self {
        self.expander = Some(Arc::new(expander));
        self
    }

    /// Validate completeness, attaching `name` (the registry key).
    pub(crate) fn into_registered(self, name: &str) -> Result<RegisteredTag, RegistryError> {
        match (self.title, self.syntax, self.expander) {
            (Some(title), Some(syntax), Some(expander)) => Ok(RegisteredTag {
                name: name.to_owned(),
                title,
                syntax,
                expander,
            }),
            (title, syntax, expander) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if syntax.is_none() {
                    missing.push("syntax");
                }
                if expander.is_none() {
                    missing.push("expander");
                }
                Err(RegistryError::InvalidDescriptor {
                    name: name.to_owned(),
                    missing,
                })
            }
        }
    }
}

impl fmt::Debug for TagDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagDescriptor")
            .field("title", &self.title)
            .field("syntax", &self.syntax)
            .field("expander", &self.expander.as_ref().map(|_| ".."))
            .finish()
    }
}

/// A validated registry entry.
///
/// All fields are present by construction; a registry never holds an entry
/// without an expander. Cloning is cheap (the expander is shared).
#[derive(Clone)]
pub struct RegisteredTag {
    name: String,
    title: String,
    syntax: String,
    expander: Arc<dyn Expand>,
}

impl RegisteredTag {
    /// Tag name (the registry key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title for editor menus and listings.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Example usage for filter tips.
    #[must_use]
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// Expand one occurrence of this tag.
    ///
    /// The expander receives the tag name, the raw attribute map, and the
    /// raw content. It filters attributes against its own allow-list and
    /// decides whether to recurse into `content` through the context
    /// callback; neither happens automatically. A failure is wrapped with
    /// the tag name so the caller can report which occurrence broke.
    pub fn expand(
        &self,
        attrs: &AttrMap,
        content: &str,
        ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpansionError> {
        self.expander
            .expand(&self.name, attrs, content, ctx)
            .map_err(|source| ExpansionError {
                tag: self.name.clone(),
                source,
            })
    }
}

impl fmt::Debug for RegisteredTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredTag")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("syntax", &self.syntax)
            .finish_non_exhaustive()
    }
}
