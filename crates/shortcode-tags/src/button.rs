//! Link-styled-as-button tag.

use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError, escape_html};

/// `[button href="https://example.com" class="primary"]Label[/button]`
///
/// Renders an anchor carrying the `button` class. `href` is required; the
/// optional `class` attribute is appended after the base class.
#[derive(Debug, Clone, Default)]
pub struct ButtonTag;

impl Expand for ButtonTag {
    fn expand(
        &self,
        _tag: &str,
        attrs: &AttrMap,
        content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        let Some(href) = attrs.get("href") else {
            return Err(ExpandError::MissingAttribute("href"));
        };

        let class = match attrs.get("class") {
            Some(extra) => format!("button {extra}"),
            None => "button".to_owned(),
        };

        Ok(format!(
            r#"<a class="{}" href="{}">{content}</a>"#,
            escape_html(&class),
            escape_html(href)
        ))
    }
}
