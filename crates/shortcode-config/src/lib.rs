//! Configuration management for the shortcode engine.
//!
//! Parses `shortcodes.toml` configuration files with serde and provides
//! auto-discovery of the config file in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! The `[tags]` section disables individual tags, the `[expansion]` section
//! picks the failure policy for broken occurrences, and the `[widget]`
//! section locates the editor plugin's static assets.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use sha2::{Digest, Sha256};
use shortcode_core::TagMap;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the disabled tag list.
    pub disabled_tags: Option<Vec<String>>,
    /// Override the expansion failure policy.
    pub on_error: Option<OnError>,
    /// Override the widget asset path.
    pub widget_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "shortcodes.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag enablement configuration.
    pub tags: TagsConfig,
    /// Expansion behavior configuration.
    pub expansion: ExpansionConfig,
    /// Editor widget configuration.
    pub widget: WidgetConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tag enablement configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    /// Tags removed from the registry after all providers have run.
    pub disabled: Vec<String>,
}

/// Expansion behavior configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// What happens to an occurrence whose expander fails.
    pub on_error: OnError,
}

/// Failure policy for a single tag occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnError {
    /// Keep the original raw markup in place and continue.
    #[default]
    KeepRaw,
    /// Abort rendering with the expansion error.
    Fail,
}

impl OnError {
    /// Configuration-file spelling of the policy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeepRaw => "keep-raw",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnError {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep-raw" => Ok(Self::KeepRaw),
            "fail" => Ok(Self::Fail),
            other => Err(ConfigError::Validation(format!(
                "expansion.on_error must be \"keep-raw\" or \"fail\", got \"{other}\""
            ))),
        }
    }
}

/// Editor widget configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// URL prefix the widget's static assets are served under.
    pub path: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            path: "/assets/shortcode".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `shortcodes.toml` in the current directory
    /// and parents, falling back to defaults when nothing is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(disabled) = &settings.disabled_tags {
            self.tags.disabled.clone_from(disabled);
        }
        if let Some(on_error) = settings.on_error {
            self.expansion.on_error = on_error;
        }
        if let Some(path) = &settings.widget_path {
            self.widget.path.clone_from(path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.widget.path, "widget.path")?;

        for name in &self.tags.disabled {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "tags.disabled entries cannot be blank".to_owned(),
                ));
            }
        }

        Ok(())
    }

    /// Whether a tag is disabled by this configuration.
    #[must_use]
    pub fn is_disabled(&self, name: &str) -> bool {
        self.tags.disabled.iter().any(|d| d == name)
    }

    /// Alterer deleting every disabled tag from the contributed map.
    ///
    /// Register it after the providers so site policy wins over whatever
    /// providers contribute under a disabled name.
    #[must_use]
    pub fn disabled_alterer(&self) -> impl Fn(&mut TagMap) + Send + Sync + 'static {
        let disabled = self.tags.disabled.clone();
        move |tags: &mut TagMap| {
            for name in &disabled {
                tags.shift_remove(name);
            }
        }
    }

    /// Content-based fingerprint of the registry-shaping settings.
    ///
    /// SHA-256 of `"{on_error}:{widget.path}:{disabled list}"`, hex-encoded.
    /// Two configs with the same settings share a fingerprint, which makes
    /// it a usable registry snapshot cache key. The disabled list is
    /// fingerprinted in order.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let content = format!(
            "{}:{}:{}",
            self.expansion.on_error,
            self.widget.path,
            self.tags.disabled.join(",")
        );
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let result = hasher.finalize();
        hex::encode(result)
    }
}
