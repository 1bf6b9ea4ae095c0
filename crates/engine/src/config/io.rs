//! Loading and saving the navigation configuration file.
//!
//! The file holds a partial configuration in wire form (for example
//! `{"mode": "directional", "fallback": "nearest"}`) and is merged onto the
//! built-in defaults at startup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, home_dir};
use padnav_types::{ConfigPatch, NavigationConfig};
use serde_json::Value;
use tracing::debug;

use super::validation::{ConfigError, parse_patch};

/// Environment variable allowing callers to override the configuration path.
pub const CONFIG_PATH_ENV: &str = "PADNAV_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "navigation.json";

/// Returns the default path for the navigation configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("padnav")
        .join(CONFIG_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(trimmed)
}

/// Reads the patch stored at `path`. A missing file is an empty patch.
pub fn load_patch_from_path(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no navigation configuration file; using defaults");
            return Ok(ConfigPatch::default());
        }
        Err(error) => return Err(ConfigError::Io(error)),
    };

    let raw: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    parse_patch(&raw)
}

/// Loads the configuration at `path`, merged onto the defaults.
pub fn load_config_from_path(path: &Path) -> Result<NavigationConfig, ConfigError> {
    let patch = load_patch_from_path(path)?;
    Ok(patch.apply_to(&NavigationConfig::default()))
}

/// Writes `patch` to `path` as pretty JSON, creating parent directories.
pub fn save_patch_to_path(patch: &ConfigPatch, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(patch)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), "saved navigation configuration");
    Ok(())
}
