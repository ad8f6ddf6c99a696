//! Random string tag.

use rand::RngExt;
use shortcode_core::{AttrMap, Expand, ExpandContext, ExpandError};

const DEFAULT_LENGTH: usize = 8;
const MAX_LENGTH: usize = 64;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// `[random length="12" /]`
///
/// Expands to a fresh alphanumeric string on every occurrence, for cache
/// busting and one-off element ids. `length` defaults to 8 and is capped at
/// 64; content and other attributes are ignored.
#[derive(Debug, Clone, Default)]
pub struct RandomTag;

impl Expand for RandomTag {
    fn expand(
        &self,
        _tag: &str,
        attrs: &AttrMap,
        _content: &str,
        _ctx: &ExpandContext<'_>,
    ) -> Result<String, ExpandError> {
        let length = match attrs.get("length") {
            Some(raw) => parse_length(raw)?,
            None => DEFAULT_LENGTH,
        };

        let mut rng = rand::rng();
        let value = (0..length)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                char::from(CHARSET[idx])
            })
            .collect();
        Ok(value)
    }
}

fn parse_length(raw: &str) -> Result<usize, ExpandError> {
    let length: usize = raw.parse().map_err(|_| ExpandError::InvalidAttribute {
        attribute: "length",
        message: format!("`{raw}` is not a number"),
    })?;

    if length == 0 || length > MAX_LENGTH {
        return Err(ExpandError::InvalidAttribute {
            attribute: "length",
            message: format!("must be between 1 and {MAX_LENGTH}, got {length}"),
        });
    }
    Ok(length)
}
