//! Navigation configuration model.
//!
//! [`NavigationConfig`] is the full set of tunables read by the direction
//! filters and distance scorers. [`ConfigPatch`] is its partial form: every
//! field optional, merged shallowly onto an existing configuration.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Selects which filter/scorer pair runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Half-plane filter plus entry/exit-point scoring; suits strict grids.
    #[default]
    Geometric,
    /// Cone filter plus weighted edge-gap scoring; tolerates layout jitter.
    Directional,
}

impl NavigationMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            NavigationMode::Geometric => "geometric",
            NavigationMode::Directional => "directional",
        }
    }
}

/// Strategy consulted when the cone filter leaves nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackStrategy {
    #[default]
    None,
    /// Nearest center, ignoring direction.
    Nearest,
    /// Wrap around to the opposite edge.
    Wrap,
}

impl FallbackStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            FallbackStrategy::None => "none",
            FallbackStrategy::Nearest => "nearest",
            FallbackStrategy::Wrap => "wrap",
        }
    }
}

/// What happens to the chosen item before focus moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollBehavior {
    /// Ask the host to scroll the target into view first.
    ScrollFirst,
    #[default]
    Focus,
}

impl ScrollBehavior {
    pub const fn as_str(self) -> &'static str {
        match self {
            ScrollBehavior::ScrollFirst => "scrollFirst",
            ScrollBehavior::Focus => "focus",
        }
    }
}

/// Raised when a string is not one of an option's literal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError {
    pub option: &'static str,
    pub input: String,
    pub expected: &'static [&'static str],
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} '{}'; expected one of: {}",
            self.option,
            self.input,
            self.expected.join(", ")
        )
    }
}

impl Error for ParseOptionError {}

impl FromStr for NavigationMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "geometric" => Ok(Self::Geometric),
            "directional" => Ok(Self::Directional),
            other => Err(ParseOptionError {
                option: "mode",
                input: other.to_string(),
                expected: &["geometric", "directional"],
            }),
        }
    }
}

impl FromStr for FallbackStrategy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "nearest" => Ok(Self::Nearest),
            "wrap" => Ok(Self::Wrap),
            other => Err(ParseOptionError {
                option: "fallback",
                input: other.to_string(),
                expected: &["none", "nearest", "wrap"],
            }),
        }
    }
}

impl FromStr for ScrollBehavior {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scrollFirst" => Ok(Self::ScrollFirst),
            "focus" => Ok(Self::Focus),
            other => Err(ParseOptionError {
                option: "scrollBehavior",
                input: other.to_string(),
                expected: &["scrollFirst", "focus"],
            }),
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active navigation tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationConfig {
    pub mode: NavigationMode,
    /// Half-angle of the directional cone, in degrees.
    pub cone_angle: f64,
    /// Weight of the leading-edge gap in directional scoring.
    pub primary_weight: f64,
    /// Weight of the perpendicular center offset in directional scoring.
    pub secondary_weight: f64,
    /// Enables the perpendicular-overlap reward in directional scoring.
    pub overlap_bonus: bool,
    pub overlap_weight: f64,
    /// Enables the same-row/same-column reward in directional scoring.
    pub row_column_bias: bool,
    pub alignment_weight: f64,
    pub scroll_behavior: ScrollBehavior,
    pub fallback: FallbackStrategy,
    /// Orthogonal penalty for left/right moves in geometric scoring.
    #[serde(rename = "orthogonalWeightLR")]
    pub orthogonal_weight_lr: f64,
    /// Orthogonal penalty for up/down moves in geometric scoring.
    #[serde(rename = "orthogonalWeightUD")]
    pub orthogonal_weight_ud: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::Geometric,
            cone_angle: 30.0,
            primary_weight: 1.0,
            secondary_weight: 0.5,
            overlap_bonus: true,
            overlap_weight: 5.0,
            row_column_bias: true,
            alignment_weight: 5.0,
            scroll_behavior: ScrollBehavior::Focus,
            fallback: FallbackStrategy::None,
            orthogonal_weight_lr: 30.0,
            orthogonal_weight_ud: 2.0,
        }
    }
}

impl NavigationConfig {
    /// Numeric fields paired with their wire names, in declaration order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("coneAngle", self.cone_angle),
            ("primaryWeight", self.primary_weight),
            ("secondaryWeight", self.secondary_weight),
            ("overlapWeight", self.overlap_weight),
            ("alignmentWeight", self.alignment_weight),
            ("orthogonalWeightLR", self.orthogonal_weight_lr),
            ("orthogonalWeightUD", self.orthogonal_weight_ud),
        ]
    }
}

/// Partial configuration; `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<NavigationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cone_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_bonus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_column_bias: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_behavior: Option<ScrollBehavior>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackStrategy>,
    #[serde(rename = "orthogonalWeightLR", skip_serializing_if = "Option::is_none")]
    pub orthogonal_weight_lr: Option<f64>,
    #[serde(rename = "orthogonalWeightUD", skip_serializing_if = "Option::is_none")]
    pub orthogonal_weight_ud: Option<f64>,
}

impl ConfigPatch {
    /// Numeric fields that are present in the patch, with their wire names.
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        [
            ("coneAngle", self.cone_angle),
            ("primaryWeight", self.primary_weight),
            ("secondaryWeight", self.secondary_weight),
            ("overlapWeight", self.overlap_weight),
            ("alignmentWeight", self.alignment_weight),
            ("orthogonalWeightLR", self.orthogonal_weight_lr),
            ("orthogonalWeightUD", self.orthogonal_weight_ud),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
    }

    /// Shallow merge onto `base`.
    pub fn apply_to(&self, base: &NavigationConfig) -> NavigationConfig {
        let mut merged = base.clone();
        if let Some(mode) = self.mode {
            merged.mode = mode;
        }
        if let Some(cone_angle) = self.cone_angle {
            merged.cone_angle = cone_angle;
        }
        if let Some(primary_weight) = self.primary_weight {
            merged.primary_weight = primary_weight;
        }
        if let Some(secondary_weight) = self.secondary_weight {
            merged.secondary_weight = secondary_weight;
        }
        if let Some(overlap_bonus) = self.overlap_bonus {
            merged.overlap_bonus = overlap_bonus;
        }
        if let Some(overlap_weight) = self.overlap_weight {
            merged.overlap_weight = overlap_weight;
        }
        if let Some(row_column_bias) = self.row_column_bias {
            merged.row_column_bias = row_column_bias;
        }
        if let Some(alignment_weight) = self.alignment_weight {
            merged.alignment_weight = alignment_weight;
        }
        if let Some(scroll_behavior) = self.scroll_behavior {
            merged.scroll_behavior = scroll_behavior;
        }
        if let Some(fallback) = self.fallback {
            merged.fallback = fallback;
        }
        if let Some(weight) = self.orthogonal_weight_lr {
            merged.orthogonal_weight_lr = weight;
        }
        if let Some(weight) = self.orthogonal_weight_ud {
            merged.orthogonal_weight_ud = weight;
        }
        merged
    }
}
