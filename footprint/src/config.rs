//! Scoring configuration.
//!
//! All thresholds are named constants with a TOML override:
//!
//! ```toml
//! completeness = "lenient"
//! reduction_cap = 20.0
//!
//! [tiers]
//! low_max = 15
//! medium_max = 30
//!
//! [suggestions]
//! getting_started_min = 40
//! leadership_max = 15
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest total still classified as low impact.
pub const DEFAULT_LOW_MAX: u32 = 18;

/// Highest total still classified as medium impact.
pub const DEFAULT_MEDIUM_MAX: u32 = 32;

/// Totals at or above this get the "getting started" suggestion.
pub const DEFAULT_GETTING_STARTED_MIN: u32 = 40;

/// Totals at or below this get the "sustainability champion" suggestion.
pub const DEFAULT_LEADERSHIP_MAX: u32 = 15;

/// Upper bound for the estimated total score reduction.
pub const DEFAULT_REDUCTION_CAP: f64 = 25.0;

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// What to do with an answer set that is incomplete or holds values the
/// catalog does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletenessPolicy {
    /// Reject with an `AnswerError`.
    #[default]
    Strict,
    /// Score anyway; missing and undeclared answers contribute 0.
    Lenient,
}

/// The two cut points between impact tiers. Both are inclusive on the
/// lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub low_max: u32,
    pub medium_max: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_max: DEFAULT_LOW_MAX,
            medium_max: DEFAULT_MEDIUM_MAX,
        }
    }
}

/// Global score thresholds for the suggestions not tied to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionThresholds {
    pub getting_started_min: u32,
    pub leadership_max: u32,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            getting_started_min: DEFAULT_GETTING_STARTED_MIN,
            leadership_max: DEFAULT_LEADERSHIP_MAX,
        }
    }
}

/// Top-level scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub completeness: CompletenessPolicy,
    pub reduction_cap: f64,
    pub tiers: TierThresholds,
    pub suggestions: SuggestionThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            completeness: CompletenessPolicy::default(),
            reduction_cap: DEFAULT_REDUCTION_CAP,
            tiers: TierThresholds::default(),
            suggestions: SuggestionThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading scoring config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that the thresholds describe non-overlapping bands.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.low_max >= self.tiers.medium_max {
            return Err(ConfigError::Invalid(format!(
                "tiers.low_max ({}) must be below tiers.medium_max ({})",
                self.tiers.low_max, self.tiers.medium_max
            )));
        }
        if self.suggestions.leadership_max >= self.suggestions.getting_started_min {
            return Err(ConfigError::Invalid(format!(
                "suggestions.leadership_max ({}) must be below suggestions.getting_started_min ({})",
                self.suggestions.leadership_max, self.suggestions.getting_started_min
            )));
        }
        if self.reduction_cap.is_nan() || self.reduction_cap < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "reduction_cap must be a non-negative number, got {}",
                self.reduction_cap
            )));
        }
        Ok(())
    }
}
