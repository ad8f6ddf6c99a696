//! Built-in basic tags.
//!
//! A ready-made provider of common presentation tags: quotes, highlights,
//! drop caps, buttons, images, float clearing, and random strings. Hosts
//! register [`basic_tags`] alongside their own providers, then alter or
//! disable individual entries as site policy dictates.
//!
//! # Example
//!
//! ```
//! use shortcode_core::{AttrMap, ExpandContext, RegistryBuilder};
//! use shortcode_tags::basic_tags;
//!
//! let registry = RegistryBuilder::new()
//!     .with_provider(basic_tags)
//!     .build()
//!     .unwrap();
//!
//! let tag = registry.get("dropcap").unwrap();
//! let ctx = ExpandContext::without_recursion();
//! let html = tag.expand(&AttrMap::new(), "O", &ctx).unwrap();
//! assert_eq!(html, r#"<span class="dropcap">O</span>"#);
//! ```

mod button;
mod clear;
mod dropcap;
mod highlight;
mod image;
mod quote;
mod random;

pub use button::ButtonTag;
pub use clear::ClearTag;
pub use dropcap::DropcapTag;
pub use highlight::HighlightTag;
pub use image::ImageTag;
pub use quote::QuoteTag;
pub use random::RandomTag;

use shortcode_core::{TagDescriptor, TagMap};

/// All built-in tags as one provider.
///
/// Register with
/// [`RegistryBuilder::with_provider`](shortcode_core::RegistryBuilder::with_provider).
/// Later providers override these entries key by key, and alterers can
/// remove or replace individual tags.
#[must_use]
pub fn basic_tags() -> TagMap {
    let mut tags = TagMap::new();
    tags.insert(
        "quote".to_owned(),
        TagDescriptor::new()
            .with_title("Quote")
            .with_syntax(r#"[quote author="Ada Lovelace"]content[/quote]"#)
            .with_expander(QuoteTag),
    );
    tags.insert(
        "highlight".to_owned(),
        TagDescriptor::new()
            .with_title("Highlight")
            .with_syntax("[highlight]content[/highlight]")
            .with_expander(HighlightTag),
    );
    tags.insert(
        "dropcap".to_owned(),
        TagDescriptor::new()
            .with_title("Drop cap")
            .with_syntax("[dropcap]O[/dropcap]nce upon a time")
            .with_expander(DropcapTag),
    );
    tags.insert(
        "button".to_owned(),
        TagDescriptor::new()
            .with_title("Button")
            .with_syntax(r#"[button href="https://example.com"]Label[/button]"#)
            .with_expander(ButtonTag),
    );
    tags.insert(
        "img".to_owned(),
        TagDescriptor::new()
            .with_title("Image")
            .with_syntax(r#"[img src="/files/pic.png" alt="A picture" /]"#)
            .with_expander(ImageTag),
    );
    tags.insert(
        "clear".to_owned(),
        TagDescriptor::new()
            .with_title("Clear floats")
            .with_syntax("[clear /]")
            .with_expander(ClearTag),
    );
    tags.insert(
        "random".to_owned(),
        TagDescriptor::new()
            .with_title("Random string")
            .with_syntax(r#"[random length="12" /]"#)
            .with_expander(RandomTag),
    );
    tags
}
