//! Attribute filtering and markup helpers.
//!
//! User-typed attributes pass through [`filter_attributes`] before they are
//! rendered, so only keys a tag explicitly allows survive into markup. The
//! filter is structural: it never inspects or escapes values. Escaping is a
//! separate, explicit step ([`escape_html`], [`render_attributes`]) owned by
//! whoever builds the output string.

use indexmap::IndexMap;

/// Ordered attribute mapping for a single tag occurrence.
///
/// Insertion order is preserved, so filtered and rendered output is
/// deterministic.
pub type AttrMap = IndexMap<String, String>;

/// Keep only the attributes named in `allowed`.
///
/// The result follows the iteration order of `allowed`, not the order of the
/// input map. Keys absent from the input are skipped; keys absent from
/// `allowed` are dropped silently. Matching is exact and case-sensitive.
///
/// This never fails: empty inputs and empty allow-lists yield empty results,
/// and filtering an already-filtered map with the same allow-list is a no-op.
///
/// # Example
///
/// ```
/// use shortcode_core::{AttrMap, filter_attributes};
///
/// let mut attrs = AttrMap::new();
/// attrs.insert("evil".to_owned(), "x".to_owned());
/// attrs.insert("foo".to_owned(), "a".to_owned());
///
/// let filtered = filter_attributes(&attrs, &["foo", "bar"]);
/// assert_eq!(filtered.get("foo").map(String::as_str), Some("a"));
/// assert!(!filtered.contains_key("evil"));
/// ```
#[must_use]
pub fn filter_attributes(attrs: &AttrMap, allowed: &[&str]) -> AttrMap {
    let mut filtered = AttrMap::new();
    for &key in allowed {
        if let Some(value) = attrs.get(key) {
            filtered.insert(key.to_owned(), value.clone());
        }
    }
    filtered
}

/// Escape text for embedding in HTML content or attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render attributes as ` key="value"` pairs in map order.
///
/// Values are escaped with [`escape_html`]; keys are written as-is and must
/// come from an allow-list, not from user input. The result carries a
/// leading space per pair so it can be pushed directly after a tag name;
/// an empty map renders as an empty string.
#[must_use]
pub fn render_attributes(attrs: &AttrMap) -> String {
    let mut result = String::new();
    for (key, value) in attrs {
        result.push(' ');
        result.push_str(key);
        result.push_str("=\"");
        result.push_str(&escape_html(value));
        result.push('"');
    }
    result
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
    fn test_filter_keeps_only_allowed_keys() {
        let input = attrs(&[("foo", "a"), ("evil", "b")]);
        let filtered = filter_attributes(&input, &["foo", "bar", "baz"]);
        assert_eq!(filtered, attrs(&[("foo", "a")]));
    }

    #[test]
    fn test_filter_output_follows_allow_list_order() {
        let input = attrs(&[("c", "3"), ("a", "1"), ("b", "2")]);
        let filtered = filter_attributes(&input, &["a", "b", "c"]);

        let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_filter_empty_attrs_yields_empty() {
        let filtered = filter_attributes(&AttrMap::new(), &["foo", "bar"]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_empty_allow_list_yields_empty() {
        let input = attrs(&[("foo", "a"), ("bar", "b")]);
        let filtered = filter_attributes(&input, &[]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let allowed = ["foo", "bar"];
        let input = attrs(&[("bar", "b"), ("foo", "a"), ("evil", "x")]);

        let once = filter_attributes(&input, &allowed);
        let twice = filter_attributes(&once, &allowed);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let input = attrs(&[("Foo", "a")]);
        let filtered = filter_attributes(&input, &["foo"]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_values() {
        let input = attrs(&[("foo", "<script>\"&'")]);
        let filtered = filter_attributes(&input, &["foo"]);
        assert_eq!(
            filtered.get("foo").map(String::as_str),
            Some("<script>\"&'")
        );
    }

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn test_render_attributes_empty_map() {
        assert_eq!(render_attributes(&AttrMap::new()), "");
    }

    #[test]
    fn test_render_attributes_pairs_in_map_order() {
        let input = attrs(&[("foo", "a"), ("bar", "b")]);
        assert_eq!(render_attributes(&input), r#" foo="a" bar="b""#);
    }

    #[test]
    fn test_render_attributes_escapes_values() {
        let input = attrs(&[("title", r#"say "hi" & <go>"#)]);
        assert_eq!(
            render_attributes(&input),
            r#" title="say &quot;hi&quot; &amp; &lt;go&gt;""#
        );
    }
}
