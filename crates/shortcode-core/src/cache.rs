//! Registry snapshot reuse keyed by a configuration fingerprint.

use std::sync::{Arc, Mutex};

use crate::registry::Registry;

/// Single-slot registry cache validated by an opaque fingerprint.
///
/// The fingerprint is an opaque string describing everything the registry
/// was built from (for example a configuration hash). A lookup hits only
/// when the stored fingerprint matches; storing replaces the slot
/// wholesale, so a configuration change invalidates the previous snapshot
/// on the next build.
///
/// Correctness never depends on this cache. Callers that skip it simply
/// rebuild per render context.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shortcode_core::{Registry, RegistryCache};
///
/// let cache = RegistryCache::new();
/// assert!(cache.get("v1").is_none());
///
/// cache.set("v1", Arc::new(Registry::default()));
/// assert!(cache.get("v1").is_some());
/// assert!(cache.get("v2").is_none());
/// ```
#[derive(Default)]
pub struct RegistryCache {
    slot: Mutex<Option<(String, Arc<Registry>)>>,
}

impl RegistryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot if `fingerprint` matches the stored one.
    ///
    /// A poisoned lock degrades to a miss.
    #[must_use]
    pub fn get(&self, fingerprint: &str) -> Option<Arc<Registry>> {
        let slot = self.slot.lock().ok()?;
        match slot.as_ref() {
            Some((stored, registry)) if stored == fingerprint => Some(Arc::clone(registry)),
            _ => None,
        }
    }

    /// Store a snapshot under `fingerprint`, replacing any previous one
    /// regardless of its fingerprint.
    pub fn set(&self, fingerprint: impl Into<String>, registry: Arc<Registry>) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some((fingerprint.into(), registry));
        }
    }

    /// Return the snapshot for `fingerprint`, building and storing a fresh
    /// one on miss.
    ///
    /// # Errors
    ///
    /// Propagates the builder's error; the slot is left unchanged then.
    pub fn get_or_build<F, E>(&self, fingerprint: &str, build: F) -> Result<Arc<Registry>, E>
    where
        F: FnOnce() -> Result<Registry, E>,
    {
        if let Some(registry) = self.get(fingerprint) {
            return Ok(registry);
        }
        let registry = Arc::new(build()?);
        self.set(fingerprint, Arc::clone(&registry));
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn test_empty_cache_misses() {
        let cache = RegistryCache::new();
        assert!(cache.get("abc").is_none());
    }

    #[test]
    fn test_hit_requires_matching_fingerprint() {
        let cache = RegistryCache::new();
        cache.set("v1", Arc::new(Registry::default()));

        assert!(cache.get("v1").is_some());
        assert!(cache.get("v2").is_none());
    }

    #[test]
    fn test_set_replaces_previous_snapshot() {
        let cache = RegistryCache::new();
        cache.set("v1", Arc::new(Registry::default()));
        cache.set("v2", Arc::new(Registry::default()));

        assert!(cache.get("v1").is_none());
        assert!(cache.get("v2").is_some());
    }

    #[test]
    fn test_get_or_build_builds_once_per_fingerprint() {
        let cache = RegistryCache::new();

        let first = cache
            .get_or_build("v1", || Ok::<_, RegistryError>(Registry::default()))
            .unwrap();
        let second = cache
            .get_or_build("v1", || -> Result<Registry, RegistryError> {
                panic!("must not rebuild for a matching fingerprint")
            })
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_get_or_build_propagates_build_error() {
        let cache = RegistryCache::new();
        let result = cache.get_or_build("v1", || {
            Err::<Registry, _>(RegistryError::InvalidDescriptor {
                name: "x".to_owned(),
                missing: vec!["title"],
            })
        });

        assert!(result.is_err());
        // Failed build leaves the slot empty
        assert!(cache.get("v1").is_none());
    }
}
