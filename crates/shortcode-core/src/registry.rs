//! Validated tag registry.

use indexmap::IndexMap;

use crate::builder::TagMap;
use crate::descriptor::RegisteredTag;
use crate::error::RegistryError;

/// Immutable mapping from tag name to validated descriptor.
///
/// Built by [`RegistryBuilder`](crate::RegistryBuilder); every entry carries
/// a title, a syntax example, and an expander. A registry is a snapshot:
/// rebuild it per render context, or share one through
/// [`RegistryCache`](crate::RegistryCache) when the inputs have not changed.
///
/// Lookup is the caller's entry point into expansion: `get` returning `None`
/// means the tag is unknown to this registry, and what happens to the
/// occurrence is the caller's policy (see
/// [`expand_or_keep`](crate::expand_or_keep)).
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, RegisteredTag>,
}

impl Registry {
    /// Validate a merged draft map into a registry.
    pub(crate) fn from_drafts(tags: TagMap) -> Result<Self, RegistryError> {
        let mut entries = IndexMap::with_capacity(tags.len());
        for (name, draft) in tags {
            let registered = draft.into_registered(&name)?;
            entries.insert(name, registered);
        }
        Ok(Self { entries })
    }

    /// Look up a tag by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredTag> {
        self.entries.get(name)
    }

    /// Whether a tag name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered tag names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Registered tags, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTag> {
        self.entries.values()
    }

    /// One `title: syntax` line per tag, for filter tips display.
    #[must_use]
    pub fn tips(&self) -> Vec<String> {
        self.entries
            .values()
            .map(|tag| format!("{}: {}", tag.title(), tag.syntax()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrMap;
    use crate::builder::{RegistryBuilder, TagMap};
    use crate::descriptor::TagDescriptor;
    use crate::error::ExpandError;
    use crate::expand::ExpandContext;
    use pretty_assertions::assert_eq;

    fn noop(
        _tag: &str,
        _attrs: &AttrMap,
        _content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        Ok(String::new())
    }

    fn sample_registry() -> Registry {
        RegistryBuilder::new()
            .with_provider(|| {
                let mut tags = TagMap::new();
                tags.insert(
                    "quote".to_owned(),
                    TagDescriptor::new()
                        .with_title("Quote")
                        .with_syntax("[quote]text[/quote]")
                        .with_expander(noop),
                );
                tags.insert(
                    "img".to_owned(),
                    TagDescriptor::new()
                        .with_title("Image")
                        .with_syntax(r#"[img src="x" /]"#)
                        .with_expander(noop),
                );
                tags
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_and_contains() {
        let registry = sample_registry();
        assert!(registry.contains("quote"));
        assert!(registry.get("quote").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_names_preserve_registration_order() {
        let registry = sample_registry();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["quote", "img"]);
    }

    #[test]
    fn test_tips_lines() {
        let registry = sample_registry();
        assert_eq!(
            registry.tips(),
            vec![
                "Quote: [quote]text[/quote]".to_owned(),
                r#"Image: [img src="x" /]"#.to_owned(),
            ]
        );
    }

    #[test]
    fn test_default_registry_is_empty() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.tips().is_empty());
    }
}
