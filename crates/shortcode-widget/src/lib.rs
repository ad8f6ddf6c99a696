//! Editor insertion surface.
//!
//! The rich-text-editor side of the engine: the data an insertion button
//! needs to offer a tag picker and drop `[tagname]` at the caret. Rendering
//! the dialog belongs to the editor frontend; this crate only supplies
//! asset locations, menu entries, and the inserted text.

use serde::{Deserialize, Serialize};
use shortcode_core::Registry;

/// Static-asset location for the editor plugin.
///
/// `path` is the URL prefix the plugin's assets are served under; the
/// editor uses it to locate images shipped with the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// URL prefix of the plugin's static assets.
    pub path: String,
}

impl WidgetSettings {
    /// Create settings rooted at the given URL prefix.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// URL of an asset relative to the plugin root.
    #[must_use]
    pub fn asset_url(&self, rel: &str) -> String {
        format!(
            "{}/{}",
            self.path.trim_end_matches('/'),
            rel.trim_start_matches('/')
        )
    }

    /// URL of the transparent placeholder image the editor shows in place
    /// of unrendered macro markup.
    #[must_use]
    pub fn placeholder_image_url(&self) -> String {
        self.asset_url("images/spacer.gif")
    }
}

/// One selectable entry of the insertion menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Tag name, the value inserted on selection.
    pub name: String,
    /// Display title shown to the author.
    pub title: String,
}

/// Ordered tag picker data for the insertion dialog.
///
/// Entries follow registry order, so the menu is stable across rebuilds of
/// the same configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagMenu {
    entries: Vec<MenuEntry>,
}

impl TagMenu {
    /// Build the menu from a validated registry.
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        let entries = registry
            .iter()
            .map(|tag| MenuEntry {
                name: tag.name().to_owned(),
                title: tag.title().to_owned(),
            })
            .collect();
        Self { entries }
    }

    /// Menu entries in registry order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The literal text inserted at the caret for a chosen tag.
///
/// Always `[name]`, with no attributes and no closing tag; the author
/// fills those in. Performs no registry validation.
#[must_use]
pub fn insertion_text(name: &str) -> String {
    format!("[{name}]")
}
