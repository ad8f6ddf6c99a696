//! Inline highlight tag.

use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError, escape_html};

/// `[highlight]content[/highlight]`
///
/// Wraps content in `<span class="highlight">`; the `class` attribute
/// replaces the default class.
#[derive(Debug, Clone, Default)]
pub struct HighlightTag;

impl Expand for HighlightTag {
    fn expand(
        &self,
        _tag: &str,
        attrs: &AttrMap,
        content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        let class = attrs.get("class").map_or("highlight", String::as_str);
        Ok(format!(
            r#"<span class="{}">{content}</span>"#,
            escape_html(class)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_class() {
        let ctx = ExpandContext::without_recursion();
        let out = HighlightTag
            .expand("highlight", &AttrMap::new(), "marked", &ctx)
            .unwrap();
        assert_eq!(out, r#"<span class="highlight">marked</span>"#);
    }

    #[test]
    fn test_class_override() {
        let mut attrs = AttrMap::new();
        attrs.insert("class".to_owned(), "warning".to_owned());

        let ctx = ExpandContext::without_recursion();
        let out = HighlightTag
            .expand("highlight", &attrs, "marked", &ctx)
            .unwrap();
        assert_eq!(out, r#"<span class="warning">marked</span>"#);
    }

    #[test]
    fn test_content_is_not_escaped() {
        let ctx = ExpandContext::without_recursion();
        let out = HighlightTag
            .expand("highlight", &AttrMap::new(), "<em>x</em>", &ctx)
            .unwrap();
        assert_eq!(out, r#"<span class="highlight"><em>x</em></span>"#);
    }
}
