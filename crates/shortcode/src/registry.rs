//! Registry assembly from configuration.

use shortcode_config::Config;
use shortcode_core::{Registry, RegistryBuilder, RegistryError};
use shortcode_tags::basic_tags;

/// Build the tag registry described by the configuration.
///
/// The built-in tag set is the only provider; the config's disabled list
/// runs as an alterer after it.
pub(crate) fn build_registry(config: &Config) -> Result<Registry, RegistryError> {
    RegistryBuilder::new()
        .with_provider(basic_tags)
        .with_alterer(config.disabled_alterer())
        .build()
}
