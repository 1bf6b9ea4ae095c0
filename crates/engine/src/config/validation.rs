//! Configuration validation.
//!
//! Patches are checked in full before anything is merged, so a rejected call
//! never leaves the store half-updated.

use std::path::PathBuf;

use padnav_types::{ConfigPatch, FallbackStrategy, NavigationConfig, NavigationMode, ScrollBehavior};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors raised while validating, loading, or saving navigation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid mode '{value}': expected 'geometric' or 'directional'")]
    InvalidMode { value: String },

    #[error("invalid scrollBehavior '{value}': expected 'scrollFirst' or 'focus'")]
    InvalidScrollBehavior { value: String },

    #[error("invalid fallback '{value}': expected 'none', 'nearest' or 'wrap'")]
    InvalidFallback { value: String },

    #[error("'{field}' must be a finite number, got {value}")]
    InvalidNumber { field: String, value: String },

    #[error("'{field}' must be a boolean, got {value}")]
    InvalidFlag { field: String, value: String },

    #[error("unknown configuration field '{field}'")]
    UnknownField { field: String },

    #[error("configuration must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Checks a typed patch: every numeric field it carries must be finite.
pub fn validate_patch(patch: &ConfigPatch) -> Result<(), ConfigError> {
    for (field, value) in patch.numeric_fields() {
        ensure_finite(field, value)?;
    }
    Ok(())
}

/// Checks a complete configuration.
pub fn validate_config(config: &NavigationConfig) -> Result<(), ConfigError> {
    for (field, value) in config.numeric_fields() {
        ensure_finite(field, value)?;
    }
    Ok(())
}

/// Converts an untyped JSON object into a validated patch.
///
/// Keys use the wire names (`coneAngle`, `orthogonalWeightLR`, ...). Each key
/// is checked against its expected literal set or JSON type; unknown keys are
/// rejected rather than ignored.
pub fn parse_patch(value: &Value) -> Result<ConfigPatch, ConfigError> {
    let Value::Object(fields) = value else {
        return Err(ConfigError::NotAnObject { found: json_kind(value) });
    };

    let mut patch = ConfigPatch::default();
    for (key, field) in fields {
        match key.as_str() {
            "mode" => {
                let mode = field
                    .as_str()
                    .and_then(|text| text.parse::<NavigationMode>().ok())
                    .ok_or_else(|| ConfigError::InvalidMode { value: describe(field) })?;
                patch.mode = Some(mode);
            }
            "scrollBehavior" => {
                let behavior = field
                    .as_str()
                    .and_then(|text| text.parse::<ScrollBehavior>().ok())
                    .ok_or_else(|| ConfigError::InvalidScrollBehavior { value: describe(field) })?;
                patch.scroll_behavior = Some(behavior);
            }
            "fallback" => {
                let fallback = field
                    .as_str()
                    .and_then(|text| text.parse::<FallbackStrategy>().ok())
                    .ok_or_else(|| ConfigError::InvalidFallback { value: describe(field) })?;
                patch.fallback = Some(fallback);
            }
            "coneAngle" => patch.cone_angle = Some(number(key, field)?),
            "primaryWeight" => patch.primary_weight = Some(number(key, field)?),
            "secondaryWeight" => patch.secondary_weight = Some(number(key, field)?),
            "overlapWeight" => patch.overlap_weight = Some(number(key, field)?),
            "alignmentWeight" => patch.alignment_weight = Some(number(key, field)?),
            "orthogonalWeightLR" => patch.orthogonal_weight_lr = Some(number(key, field)?),
            "orthogonalWeightUD" => patch.orthogonal_weight_ud = Some(number(key, field)?),
            "overlapBonus" => patch.overlap_bonus = Some(flag(key, field)?),
            "rowColumnBias" => patch.row_column_bias = Some(flag(key, field)?),
            other => return Err(ConfigError::UnknownField { field: other.to_string() }),
        }
    }

    validate_patch(&patch)?;
    debug!(fields = fields.len(), "parsed configuration patch");
    Ok(patch)
}

fn ensure_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn number(field: &str, value: &Value) -> Result<f64, ConfigError> {
    value
        .as_f64()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            field: field.to_string(),
            value: describe(value),
        })
}

fn flag(field: &str, value: &Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidFlag {
        field: field.to_string(),
        value: describe(value),
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
