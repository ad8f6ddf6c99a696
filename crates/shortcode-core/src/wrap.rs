//! Ready-made wrapping expander.

use crate::attrs::{AttrMap, filter_attributes, render_attributes};
use crate::error::ExpandError;
use crate::expand::{Expand, ExpandContext};

/// Expander that wraps content in an element named after the tag.
///
/// Attributes are filtered against the configured allow-list and rendered
/// in allow-list order with escaped values; everything else is dropped
/// silently. The content itself passes through untouched unless recursion
/// is enabled, in which case it first goes through the context callback.
///
/// A registry entry built around `WrapTag` reproduces the classic behavior
/// of turning `[example foo="x"]content[/example]` into
/// `<example foo="x">content</example>`.
///
/// # Example
///
/// ```
/// use shortcode_core::{AttrMap, Expand, ExpandContext, WrapTag};
///
/// let wrap = WrapTag::new(&["foo", "bar", "baz"]);
/// let mut attrs = AttrMap::new();
/// attrs.insert("foo".to_owned(), "a".to_owned());
/// attrs.insert("evil".to_owned(), "b".to_owned());
///
/// let ctx = ExpandContext::without_recursion();
/// let html = wrap.expand("example", &attrs, "hi", &ctx).unwrap();
/// assert_eq!(html, r#"<example foo="a">hi</example>"#);
/// ```
pub struct WrapTag {
    allowed: Vec<&'static str>,
    recurse: bool,
}

impl WrapTag {
    /// Create a wrapping expander with the given attribute allow-list.
    #[must_use]
    pub fn new(allowed: &[&'static str]) -> Self {
        Self {
            allowed: allowed.to_vec(),
            recurse: false,
        }
    }

    /// Expand nested tags in the content before wrapping. Off by default.
    #[must_use]
    pub fn with_recursion(mut self) -> Self {
        self.recurse = true;
        self
    }
}

impl Expand for WrapTag {
    fn expand(
        &self,
        tag: &str,
        attrs: &AttrMap,
        content: &str,
        ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        let allowed = filter_attributes(attrs, &self.allowed);
        let rendered = render_attributes(&allowed);
        if self.recurse {
            let inner = ctx.recurse_content(content);
            Ok(format!("<{tag}{rendered}>{inner}</{tag}>"))
        } else {
            Ok(format!("<{tag}{rendered}>{content}</{tag}>"))
        }
    }
}
