//! Float-clearing tag.

use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError};

/// `[clear /]`
///
/// Emits a `<div class="clear">` that stylesheets use to terminate floats.
/// Usually self-closing; any content ends up inside the div.
#[derive(Debug, Clone, Default)]
pub struct ClearTag;

impl Expand for ClearTag {
    fn expand(
        &self,
        _tag: &str,
        _attrs: &AttrMap,
        content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        Ok(format!(r#"<div class="clear">{content}</div>"#))
    }
}
