use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use padnav_engine::Navigator;
use padnav_engine::config::{load_config_from_path, load_patch_from_path, parse_patch, save_patch_to_path};
use padnav_types::{ConfigPatch, NavigationConfig};
use serde_json::{Map, Value};
use tracing::info;

/// Splits `key=value`. The value is read as JSON when it parses (`45`,
/// `false`) and as a bare string otherwise (`directional`).
pub fn parse_assignment(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("missing key in '{raw}'");
    }
    let value = value.trim();
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Effective configuration: the file merged onto defaults, then `overrides`.
pub fn show(path: &Path, overrides: &ConfigPatch) -> Result<NavigationConfig> {
    let config = load_config_from_path(path).with_context(|| format!("loading {}", path.display()))?;
    let mut navigator = Navigator::with_config(config)?;
    Ok(navigator.configure(overrides)?)
}

pub fn reset(path: &Path) -> Result<()> {
    save_patch_to_path(&ConfigPatch::default(), path)?;
    info!(path = %path.display(), "configuration reset to defaults");
    Ok(())
}

/// Merges `assignments` into the file at `path`. Nothing is written unless
/// every assignment validates.
pub fn set(path: &Path, assignments: &[String]) -> Result<ConfigPatch> {
    let existing = load_patch_from_path(path).with_context(|| format!("loading {}", path.display()))?;
    let mut fields = match serde_json::to_value(&existing)? {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        fields.insert(key, value);
    }
    let patch = parse_patch(&Value::Object(fields))?;
    save_patch_to_path(&patch, path)?;
    info!(path = %path.display(), keys = assignments.len(), "configuration updated");
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use padnav_types::{FallbackStrategy, NavigationMode};

    #[test]
    fn assignment_values_are_typed_when_possible() {
        assert_eq!(parse_assignment("coneAngle=45").unwrap(), ("coneAngle".into(), Value::from(45)));
        assert_eq!(parse_assignment("overlapBonus=false").unwrap(), ("overlapBonus".into(), Value::Bool(false)));
        assert_eq!(parse_assignment("mode = directional").unwrap(), ("mode".into(), Value::from("directional")));
        assert!(parse_assignment("mode").is_err());
        assert!(parse_assignment("=1").is_err());
    }

    #[test]
    fn set_merges_into_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");

        set(&path, &["mode=directional".to_string()]).unwrap();
        let patch = set(&path, &["fallback=wrap".to_string(), "coneAngle=40".to_string()]).unwrap();
        assert_eq!(patch.mode, Some(NavigationMode::Directional));
        assert_eq!(patch.fallback, Some(FallbackStrategy::Wrap));
        assert_eq!(patch.cone_angle, Some(40.0));

        let config = show(&path, &ConfigPatch::default()).unwrap();
        assert_eq!(config.mode, NavigationMode::Directional);
        assert_eq!(config.primary_weight, 1.0);
    }

    #[test]
    fn invalid_assignment_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");
        set(&path, &["fallback=nearest".to_string()]).unwrap();

        assert!(set(&path, &["mode=diagonal".to_string()]).is_err());
        assert!(set(&path, &["primaryWeight=heavy".to_string()]).is_err());
        assert!(set(&path, &["coneAngle=45".to_string(), "overlapBonus=yes".to_string()]).is_err());
        let stored = load_patch_from_path(&path).unwrap();
        assert_eq!(stored.mode, None);
        assert_eq!(stored.cone_angle, None);
        assert_eq!(stored.fallback, Some(FallbackStrategy::Nearest));
    }

    #[test]
    fn reset_restores_defaults_and_show_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");
        set(&path, &["mode=directional".to_string()]).unwrap();
        reset(&path).unwrap();
        assert_eq!(show(&path, &ConfigPatch::default()).unwrap(), NavigationConfig::default());

        let overrides = ConfigPatch {
            fallback: Some(FallbackStrategy::Nearest),
            ..ConfigPatch::default()
        };
        assert_eq!(show(&path, &overrides).unwrap().fallback, FallbackStrategy::Nearest);
    }
}
