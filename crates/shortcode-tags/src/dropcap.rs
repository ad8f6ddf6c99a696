//! Drop cap tag.

use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError};

/// `[dropcap]O[/dropcap]nce upon a time`
///
/// Wraps content in `<span class="dropcap">` so a stylesheet can render it
/// as an oversized initial letter.
#[derive(Debug, Clone, Default)]
pub struct DropcapTag;

impl Expand for DropcapTag {
    fn expand(
        &self,
        _tag: &str,
        _attrs: &AttrMap,
        content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        Ok(format!(r#"<span class="dropcap">{content}</span>"#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wraps_content() {
        let ctx = ExpandContext::without_recursion();
        let out = DropcapTag
            .expand("dropcap", &AttrMap::new(), "O", &ctx)
            .unwrap();
        assert_eq!(out, r#"<span class="dropcap">O</span>"#);
    }

    #[test]
    fn test_attributes_are_ignored() {
        let mut attrs = AttrMap::new();
        attrs.insert("class".to_owned(), "other".to_owned());

        let ctx = ExpandContext::without_recursion();
        let out = DropcapTag.expand("dropcap", &attrs, "O", &ctx).unwrap();
        assert_eq!(out, r#"<span class="dropcap">O</span>"#);
    }
}
