//! Registry construction from providers and alterers.
//!
//! Mirrors the host-application convention of collecting tag definitions
//! from several contributors, then letting later passes override or remove
//! entries, with one validation step at the very end.

use indexmap::IndexMap;

use crate::descriptor::TagDescriptor;
use crate::error::RegistryError;
use crate::registry::Registry;

/// Ordered mapping from tag name to contributed descriptor draft.
///
/// Providers return one of these; alterers receive the merged map mutably.
pub type TagMap = IndexMap<String, TagDescriptor>;

/// Provider callback type: contributes descriptors during registry build.
pub type ProviderFn = dyn Fn() -> TagMap + Send + Sync;

/// Alterer callback type: edits the merged map after all providers ran.
pub type AltererFn = dyn Fn(&mut TagMap) + Send + Sync;

/// Builds a [`Registry`] from an ordered list of providers and alterers.
///
/// Providers are folded in registration order; for duplicate keys the last
/// provider wins. Alterers then run in registration order with mutable
/// access to the whole map, so any of them may add, replace, or delete any
/// entry, including entries other contributors registered. Validation
/// happens once, after the last alterer: a descriptor that is incomplete
/// mid-build but completed later is fine.
///
/// Building is a pure aggregation and may be repeated; a host typically
/// configures one builder at startup and calls [`build`](Self::build) per
/// render context.
///
/// # Example
///
/// ```
/// use shortcode_core::{RegistryBuilder, TagDescriptor, TagMap, WrapTag};
///
/// fn tags() -> TagMap {
///     let mut tags = TagMap::new();
///     tags.insert(
///         "example".to_owned(),
///         TagDescriptor::new()
///             .with_title("Example")
///             .with_syntax(r#"[example foo="x"]c[/example]"#)
///             .with_expander(WrapTag::new(&["foo", "bar", "baz"])),
///     );
///     tags
/// }
///
/// let registry = RegistryBuilder::new()
///     .with_provider(tags)
///     .with_alterer(|map| {
///         map.shift_remove("example");
///     })
///     .build()
///     .unwrap();
/// assert!(registry.get("example").is_none());
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    providers: Vec<Box<ProviderFn>>,
    alterers: Vec<Box<AltererFn>>,
}

impl RegistryBuilder {
    /// Create a builder with no providers or alterers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider.
    ///
    /// Providers run in registration order; a later provider's entry for a
    /// duplicate key overwrites the earlier one.
    #[must_use]
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: Fn() -> TagMap + Send + Sync + 'static,
    {
        self.providers.push(Box::new(provider));
        self
    }

    /// Register an alterer.
    ///
    /// Alterers run after all providers, in registration order.
    #[must_use]
    pub fn with_alterer<A>(mut self, alterer: A) -> Self
    where
        A: Fn(&mut TagMap) + Send + Sync + 'static,
    {
        self.alterers.push(Box::new(alterer));
        self
    }

    /// Fold providers, apply alterers, validate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDescriptor`] for the first final
    /// entry that lacks a title, syntax example, or expander.
    pub fn build(&self) -> Result<Registry, RegistryError> {
        let mut tags = TagMap::new();
        for provider in &self.providers {
            for (name, descriptor) in provider() {
                tags.insert(name, descriptor);
            }
        }
        for alterer in &self.alterers {
            alterer(&mut tags);
        }
        Registry::from_drafts(tags)
    }
}
