//! Tag registry and expansion engine for bracketed markup tags.
//!
//! This crate implements the core of a shortcode system: site-defined tags
//! like `[example foo="x"]content[/example]` that expand into HTML at render
//! time. It deliberately owns only the part between a parsed occurrence and
//! its substitution string; scanning source text for bracket syntax is the
//! host pipeline's job.
//!
//! # Architecture
//!
//! - **Registry build** ([`RegistryBuilder`]): folds descriptor maps from an
//!   ordered list of providers (last writer wins per key), applies an
//!   ordered list of alterers with full mutable access, then validates every
//!   surviving entry once. The result is an immutable [`Registry`] of
//!   [`RegisteredTag`]s.
//! - **Attribute filtering** ([`filter_attributes`]): structural allow-list
//!   filter; output order follows the allow-list, values pass through
//!   unescaped. [`escape_html`] and [`render_attributes`] are the separate,
//!   explicit escaping step.
//! - **Expansion** ([`Expand`], [`RegisteredTag::expand`]): each occurrence
//!   is expanded by the tag's own expander, which filters attributes against
//!   its allow-list and opts into nested expansion via
//!   [`ExpandContext::recurse_content`]. [`expand_or_keep`] implements the
//!   recommended keep-raw policy at the render boundary.
//!
//! # Example
//!
//! ```
//! use shortcode_core::{
//!     AttrMap, ExpandContext, RegistryBuilder, TagDescriptor, TagMap, WrapTag,
//! };
//!
//! let registry = RegistryBuilder::new()
//!     .with_provider(|| {
//!         let mut tags = TagMap::new();
//!         tags.insert(
//!             "example".to_owned(),
//!             TagDescriptor::new()
//!                 .with_title("Example")
//!                 .with_syntax(r#"[example foo="x"]content[/example]"#)
//!                 .with_expander(WrapTag::new(&["foo", "bar", "baz"])),
//!         );
//!         tags
//!     })
//!     .build()
//!     .unwrap();
//!
//! let tag = registry.get("example").unwrap();
//! let mut attrs = AttrMap::new();
//! attrs.insert("foo".to_owned(), "a".to_owned());
//! attrs.insert("evil".to_owned(), "b".to_owned());
//!
//! let ctx = ExpandContext::without_recursion();
//! let html = tag.expand(&attrs, "hi", &ctx).unwrap();
//! assert_eq!(html, r#"<example foo="a">hi</example>"#);
//! ```

mod attrs;
mod builder;
mod cache;
mod descriptor;
mod error;
mod expand;
mod registry;
mod wrap;

pub use attrs::{AttrMap, escape_html, filter_attributes, render_attributes};
pub use builder::{AltererFn, ProviderFn, RegistryBuilder, TagMap};
pub use cache::RegistryCache;
pub use descriptor::{RegisteredTag, TagDescriptor};
pub use error::{ExpandError, ExpansionError, RegistryError};
pub use expand::{Expand, ExpandContext, TagOccurrence, expand_or_keep};
pub use registry::Registry;
pub use wrap::WrapTag;
