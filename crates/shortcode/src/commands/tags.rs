//! `shortcode tags` command implementation.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use shortcode_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::registry::build_registry;

/// Arguments for the tags command.
#[derive(Args)]
pub(crate) struct TagsArgs {
    /// Path to configuration file (default: auto-discover shortcodes.toml).
    #[arg(short, long, env = "SHORTCODE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable a tag (repeatable, overrides config).
    #[arg(long = "disable", value_name = "TAG")]
    disabled: Vec<String>,

    /// Print the tag list as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// One registry entry in `--json` output.
#[derive(Serialize)]
struct TagInfo<'a> {
    name: &'a str,
    title: &'a str,
    syntax: &'a str,
}

impl TagsArgs {
    /// Execute the tags command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or registry building fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            disabled_tags: (!self.disabled.is_empty()).then_some(self.disabled),
            ..CliSettings::default()
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = build_registry(&config)?;

        if self.json {
            let entries: Vec<TagInfo<'_>> = registry
                .iter()
                .map(|tag| TagInfo {
                    name: tag.name(),
                    title: tag.title(),
                    syntax: tag.syntax(),
                })
                .collect();
            output.line(&serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if registry.is_empty() {
            output.info("No tags registered");
            return Ok(());
        }

        output.highlight("Registered tags");
        for tip in registry.tips() {
            output.line(&tip);
        }

        Ok(())
    }
}
