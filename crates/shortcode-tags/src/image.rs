//! Image tag.

use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError, filter_attributes, render_attributes};

/// Attributes that survive onto the `<img>` element, in output order.
const ALLOWED: &[&str] = &["src", "alt", "width", "height", "class"];

/// `[img src="/files/pic.png" alt="A picture" /]`
///
/// Renders a void `<img>` element. `src` is required; everything outside
/// the allow-list is dropped. Content is ignored since the tag is meant to
/// be used self-closing.
#[derive(Debug, Clone, Default)]
pub struct ImageTag;

impl Expand for ImageTag {
    fn expand(
        &self,
        _tag: &str,
        attrs: &AttrMap,
        _content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        if !attrs.contains_key("src") {
            return Err(ExpandError::MissingAttribute("src"));
        }

        let filtered = filter_attributes(attrs, ALLOWED);
        Ok(format!("<img{} />", render_attributes(&filtered)))
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
    fn test_requires_src() {
        let ctx = ExpandContext::without_recursion();
        let err = ImageTag
            .expand("img", &attrs(&[("alt", "x")]), "", &ctx)
            .unwrap_err();
        assert!(matches!(err, ExpandError::MissingAttribute("src")));
    }

    #[test]
    fn test_renders_void_element() {
        let ctx = ExpandContext::without_recursion();
        let out = ImageTag
            .expand("img", &attrs(&[("src", "/files/pic.png")]), "", &ctx)
            .unwrap();
        assert_eq!(out, r#"<img src="/files/pic.png" />"#);
    }

    #[test]
    fn test_attributes_follow_allow_list_order() {
        let ctx = ExpandContext::without_recursion();
        let out = ImageTag
            .expand(
                "img",
                &attrs(&[("alt", "A picture"), ("src", "/p.png"), ("width", "80")]),
                "",
                &ctx,
            )
            .unwrap();
        assert_eq!(out, r#"<img src="/p.png" alt="A picture" width="80" />"#);
    }

    #[test]
    fn test_disallowed_attributes_are_dropped() {
        let ctx = ExpandContext::without_recursion();
        let out = ImageTag
            .expand(
                "img",
                &attrs(&[("src", "/p.png"), ("onerror", "alert(1)")]),
                "",
                &ctx,
            )
            .unwrap();
        assert_eq!(out, r#"<img src="/p.png" />"#);
    }

    #[test]
    fn test_content_is_ignored() {
        let ctx = ExpandContext::without_recursion();
        let out = ImageTag
            .expand("img", &attrs(&[("src", "/p.png")]), "stray", &ctx)
            .unwrap();
        assert_eq!(out, r#"<img src="/p.png" />"#);
    }
}
