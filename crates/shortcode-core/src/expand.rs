//! Expander trait and the render-pipeline boundary.
//!
//! The host pipeline owns the bracket syntax: it scans source text, parses
//! each occurrence into name, attributes, and content, and hands the engine
//! one [`TagOccurrence`] at a time. The engine never tokenizes.

use crate::attrs::AttrMap;
use crate::error::ExpandError;
use crate::registry::Registry;

/// Produces the substitution string for one tag occurrence.
///
/// Implementations receive the tag name, the raw (unfiltered) attribute map,
/// and the raw inner content. Filtering attributes against the tag's own
/// allow-list, escaping values, and recursing into `content` via
/// [`ExpandContext::recurse_content`] are all the implementation's
/// responsibility; none of it happens automatically.
///
/// Plain functions with the matching signature implement this trait through
/// a blanket impl, so a provider can register a free function directly.
///
/// # Example
///
/// ```
/// use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError};
///
/// fn shout(
///     _tag: &str,
///     _attrs: &AttrMap,
///     content: &str,
///     _ctx: &ExpandContext<'_>,
/// ) -> Result<String, ExpandError> {
///     Ok(content.to_uppercase())
/// }
///
/// let ctx = ExpandContext::without_recursion();
/// let out = shout.expand("shout", &AttrMap::new(), "hi", &ctx).unwrap();
/// assert_eq!(out, "HI");
/// ```
pub trait Expand: Send + Sync {
    /// Expand one occurrence into its substitution string.
    fn expand(
        &self,
        tag: &str,
        attrs: &AttrMap,
        content: &str,
        ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError>;
}

impl<F> Expand for F
where
    F: Fn(&str, &AttrMap, &str, &ExpandContext<'_>) -> Result<String, ExpandError> + Send + Sync,
{
    fn expand(
        &self,
        tag: &str,
        attrs: &AttrMap,
        content: &str,
        ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        self(tag, attrs, content, ctx)
    }
}

/// Context passed to expanders for each occurrence.
///
/// Carries the host-supplied recursion callback. Recursion is opt-in per
/// expander: an expander that wants nested tags inside its content expanded
/// calls [`recurse_content`](Self::recurse_content); everything else leaves
/// the content alone.
///
/// # Example
///
/// ```
/// use shortcode_core::ExpandContext;
///
/// let host_pass = |source: &str| source.replace("[x]", "<x>");
/// let ctx = ExpandContext { recurse: &host_pass };
/// assert_eq!(ctx.recurse_content("a [x] b"), "a <x> b");
/// ```
pub struct ExpandContext<'a> {
    /// Callback that runs the host's expansion pass over nested content.
    pub recurse: &'a dyn Fn(&str) -> String,
}

/// Identity pass used when the host performs no nested expansion.
fn keep_content(content: &str) -> String {
    content.to_owned()
}

impl<'a> ExpandContext<'a> {
    /// Create a context with the given recursion callback.
    #[must_use]
    pub fn new(recurse: &'a dyn Fn(&str) -> String) -> Self {
        Self { recurse }
    }

    /// Context whose recursion callback returns content unchanged.
    #[must_use]
    pub fn without_recursion() -> ExpandContext<'static> {
        ExpandContext {
            recurse: &keep_content,
        }
    }

    /// Run the host's expansion pass over `content`.
    #[must_use]
    pub fn recurse_content(&self, content: &str) -> String {
        (self.recurse)(content)
    }
}

/// One parsed tag occurrence supplied by the host's scanner.
///
/// `raw` is the original source text of the whole occurrence; it is what
/// stays in the document when the keep-raw policy declines to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    /// Tag name as written in the source.
    pub name: String,
    /// Raw attribute map, unfiltered.
    pub attrs: AttrMap,
    /// Inner content between opening and closing tag. Empty for
    /// self-closing occurrences.
    pub content: String,
    /// Original source text of the whole occurrence.
    pub raw: String,
}

impl TagOccurrence {
    /// Occurrence with inner content: `[name ...]content[/name]`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        attrs: AttrMap,
        content: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attrs,
            content: content.into(),
            raw: raw.into(),
        }
    }

    /// Self-closing occurrence: `[name ... /]`.
    #[must_use]
    pub fn self_closing(name: impl Into<String>, attrs: AttrMap, raw: impl Into<String>) -> Self {
        Self::new(name, attrs, String::new(), raw)
    }
}

/// Expand one occurrence under the keep-raw policy.
///
/// Unknown tags and failed expansions leave the original raw markup in
/// place, so one bad occurrence cannot break the rest of the document.
/// Unknown tags log at debug level, failures at warn level. Hosts that must
/// abort on failure call [`RegisteredTag::expand`](crate::RegisteredTag::expand)
/// directly and handle the error themselves.
#[must_use]
pub fn expand_or_keep(registry: &Registry, occ: &TagOccurrence, ctx: &ExpandContext<'_>) -> String {
    let Some(tag) = registry.get(&occ.name) else {
        tracing::debug!(tag = %occ.name, "No descriptor for tag, keeping raw markup");
        return occ.raw.clone();
    };

    match tag.expand(&occ.attrs, &occ.content, ctx) {
        Ok(expanded) => expanded,
        Err(err) => {
            tracing::warn!(tag = %occ.name, error = %err, "Tag expansion failed, keeping raw markup");
            occ.raw.clone()
        }
    }
}
