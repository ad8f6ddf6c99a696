//! Block quote tag with optional attribution.

use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError, escape_html};

/// `[quote author="..." class="..."]content[/quote]`
///
/// Wraps content in a `<blockquote>`. The optional `author` attribute is
/// rendered as a trailing `<cite>`; the optional `class` attribute lands on
/// the element. This is the one built-in that expands nested tags: content
/// is passed through the context's recursion callback before wrapping.
#[derive(Debug, Clone, Default)]
pub struct QuoteTag;

impl Expand for QuoteTag {
    fn expand(
        &self,
        _tag: &str,
        attrs: &AttrMap,
        content: &str,
        ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        let inner = ctx.recurse_content(content);

        let class_attr = attrs
            .get("class")
            .map(|class| format!(r#" class="{}""#, escape_html(class)))
            .unwrap_or_default();
        let cite = attrs
            .get("author")
            .map(|author| format!("<cite>{}</cite>", escape_html(author)))
            .unwrap_or_default();

        Ok(format!("<blockquote{class_attr}>{inner}{cite}</blockquote>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_plain_quote() {
        let ctx = ExpandContext::without_recursion();
        let out = QuoteTag
            .expand("quote", &AttrMap::new(), "words", &ctx)
            .unwrap();
        assert_eq!(out, "<blockquote>words</blockquote>");
    }

    #[test]
    fn test_author_becomes_cite() {
        let ctx = ExpandContext::without_recursion();
        let out = QuoteTag
            .expand("quote", &attrs(&[("author", "Ada Lovelace")]), "words", &ctx)
            .unwrap();
        assert_eq!(
            out,
            "<blockquote>words<cite>Ada Lovelace</cite></blockquote>"
        );
    }

    #[test]
    fn test_author_is_escaped() {
        let ctx = ExpandContext::without_recursion();
        let out = QuoteTag
            .expand("quote", &attrs(&[("author", "<b>x</b>")]), "w", &ctx)
            .unwrap();
        assert_eq!(
            out,
            "<blockquote>w<cite>&lt;b&gt;x&lt;/b&gt;</cite></blockquote>"
        );
    }

    #[test]
    fn test_class_attribute() {
        let ctx = ExpandContext::without_recursion();
        let out = QuoteTag
            .expand("quote", &attrs(&[("class", "pull")]), "w", &ctx)
            .unwrap();
        assert_eq!(out, r#"<blockquote class="pull">w</blockquote>"#);
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let ctx = ExpandContext::without_recursion();
        let out = QuoteTag
            .expand("quote", &attrs(&[("onclick", "alert(1)")]), "w", &ctx)
            .unwrap();
        assert_eq!(out, "<blockquote>w</blockquote>");
    }

    #[test]
    fn test_content_goes_through_recursion_callback() {
        let host = |source: &str| source.replace("[x/]", "<x/>");
        let ctx = ExpandContext::new(&host);

        let out = QuoteTag
            .expand("quote", &AttrMap::new(), "a [x/] b", &ctx)
            .unwrap();
        assert_eq!(out, "<blockquote>a <x/> b</blockquote>");
    }
}
