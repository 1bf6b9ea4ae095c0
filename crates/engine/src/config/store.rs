//! In-memory holder for the active navigation configuration.

use padnav_types::{ConfigPatch, NavigationConfig};
use serde_json::Value;
use tracing::debug;

use super::validation::{ConfigError, parse_patch, validate_config, validate_patch};

/// Owns one [`NavigationConfig`] and guards every mutation with validation.
///
/// Callers read configuration through [`ConfigStore::config`], which hands
/// out a copy; the stored value only changes through [`ConfigStore::configure`],
/// [`ConfigStore::configure_value`] or [`ConfigStore::reset`].
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    config: NavigationConfig,
}

impl ConfigStore {
    /// Store holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing configuration.
    pub fn with_config(config: NavigationConfig) -> Result<Self, ConfigError> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    /// Validates `patch`, merges it shallowly, and returns the new snapshot.
    pub fn configure(&mut self, patch: &ConfigPatch) -> Result<NavigationConfig, ConfigError> {
        validate_patch(patch)?;
        self.config = patch.apply_to(&self.config);
        debug!(mode = %self.config.mode, fallback = %self.config.fallback, "navigation configuration updated");
        Ok(self.config.clone())
    }

    /// Same as [`ConfigStore::configure`] for an untyped JSON object.
    pub fn configure_value(&mut self, options: &Value) -> Result<NavigationConfig, ConfigError> {
        let patch = parse_patch(options)?;
        self.configure(&patch)
    }

    /// Copy of the active configuration.
    pub fn config(&self) -> NavigationConfig {
        self.config.clone()
    }

    /// Restores the built-in defaults.
    pub fn reset(&mut self) {
        self.config = NavigationConfig::default();
        debug!("navigation configuration reset to defaults");
    }

    pub(crate) fn current(&self) -> &NavigationConfig {
        &self.config
    }
}
