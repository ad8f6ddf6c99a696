//! `shortcode expand` command implementation.

use std::path::PathBuf;

use clap::Args;
use shortcode_config::{CliSettings, Config, OnError};
use shortcode_core::{AttrMap, ExpandContext, TagOccurrence, expand_or_keep};

use crate::error::CliError;
use crate::output::Output;
use crate::registry::build_registry;

/// Arguments for the expand command.
#[derive(Args)]
pub(crate) struct ExpandArgs {
    /// Name of the tag to expand.
    #[arg(short, long)]
    tag: String,

    /// Attribute as KEY=VALUE (repeatable).
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Inner content of the occurrence.
    #[arg(long, default_value = "")]
    content: String,

    /// Treat the occurrence as self-closing.
    #[arg(long, conflicts_with = "content")]
    self_closing: bool,

    /// Failure policy, `keep-raw` or `fail` (overrides config).
    #[arg(long, value_name = "POLICY")]
    on_error: Option<OnError>,

    /// Path to configuration file (default: auto-discover shortcodes.toml).
    #[arg(short, long, env = "SHORTCODE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExpandArgs {
    /// Execute the expand command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or registry building fails,
    /// or if the `fail` policy is active and the occurrence cannot be
    /// expanded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            on_error: self.on_error,
            ..CliSettings::default()
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = build_registry(&config)?;

        let attrs: AttrMap = self.attrs.into_iter().collect();
        let raw = raw_source(&self.tag, &attrs, &self.content, self.self_closing);
        let occurrence = if self.self_closing {
            TagOccurrence::self_closing(self.tag, attrs, raw)
        } else {
            TagOccurrence::new(self.tag, attrs, self.content, raw)
        };

        let ctx = ExpandContext::without_recursion();
        let html = match config.expansion.on_error {
            OnError::KeepRaw => expand_or_keep(&registry, &occurrence, &ctx),
            OnError::Fail => {
                let tag = registry.get(&occurrence.name).ok_or_else(|| {
                    CliError::Validation(format!("unknown tag `{}`", occurrence.name))
                })?;
                tag.expand(&occurrence.attrs, &occurrence.content, &ctx)?
            }
        };

        output.line(&html);
        Ok(())
    }
}

/// Parse a single `KEY=VALUE` attribute argument.
fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

/// Reconstruct the bracketed source text of the occurrence. It is what the
/// keep-raw policy leaves in place when expansion declines.
fn raw_source(name: &str, attrs: &AttrMap, content: &str, self_closing: bool) -> String {
    let mut source = String::new();
    source.push('[');
    source.push_str(name);
    for (key, value) in attrs {
        source.push(' ');
        source.push_str(key);
        source.push_str("=\"");
        source.push_str(value);
        source.push('"');
    }
    if self_closing {
        source.push_str(" /]");
    } else {
        source.push(']');
        source.push_str(content);
        source.push_str("[/");
        source.push_str(name);
        source.push(']');
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_attr_splits_on_first_equals() {
        assert_eq!(
            parse_attr("href=/a=b").unwrap(),
            ("href".to_owned(), "/a=b".to_owned())
        );
    }

    #[test]
    fn test_parse_attr_allows_empty_value() {
        assert_eq!(parse_attr("alt=").unwrap(), ("alt".to_owned(), String::new()));
    }

    #[test]
    fn test_parse_attr_rejects_missing_equals() {
        assert!(parse_attr("href").is_err());
    }

    #[test]
    fn test_parse_attr_rejects_empty_key() {
        assert!(parse_attr("=x").is_err());
    }

    #[test]
    fn test_raw_source_paired_form() {
        let mut attrs = AttrMap::new();
        attrs.insert("author".to_owned(), "bob".to_owned());

        assert_eq!(
            raw_source("quote", &attrs, "hi", false),
            r#"[quote author="bob"]hi[/quote]"#
        );
    }

    #[test]
    fn test_raw_source_self_closing_form() {
        let mut attrs = AttrMap::new();
        attrs.insert("src".to_owned(), "/a.png".to_owned());

        assert_eq!(
            raw_source("img", &attrs, "", true),
            r#"[img src="/a.png" /]"#
        );
    }

    #[test]
    fn test_raw_source_without_attributes() {
        assert_eq!(
            raw_source("dropcap", &AttrMap::new(), "W", false),
            "[dropcap]W[/dropcap]"
        );
    }
}
