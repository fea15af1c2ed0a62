//! Scoring configuration and its JSON loader.
//!
//! Population parameters below are provisional: they were set by hand before
//! any calibration sample existed. They are configuration, not findings, and
//! are expected to be replaced once real response data is available.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dimensions::{Dimension, DimensionMap};
use crate::error::ScoringError;

/// Normal approximation of a dimension's population distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationParams {
    pub mean: f64,
    pub std_dev: f64,
}

/// Per-dimension scoring settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSettings {
    pub population: PopulationParams,
    /// How strongly social desirability inflates this dimension (0 = immune).
    pub sensitivity: f64,
    /// Value reported when no relevant question was answered.
    pub neutral_default: f64,
}

impl DimensionSettings {
    const fn new(mean: f64, std_dev: f64, sensitivity: f64) -> Self {
        Self {
            population: PopulationParams { mean, std_dev },
            sensitivity,
            neutral_default: 3.0,
        }
    }
}

fn default_dimension_settings() -> DimensionMap<DimensionSettings> {
    DimensionMap {
        religiosity: DimensionSettings::new(3.2, 0.9, 0.8),
        ai_openness: DimensionSettings::new(2.8, 1.0, 0.3),
        sacred_boundary: DimensionSettings::new(3.4, 0.9, 0.5),
        ethical_concern: DimensionSettings::new(3.5, 0.8, 0.6),
        psychological_perception: DimensionSettings::new(2.3, 0.8, 0.2),
        community_influence: DimensionSettings::new(2.9, 0.9, 0.4),
        future_orientation: DimensionSettings::new(3.1, 0.8, 0.3),
    }
}

/// Engine configuration. Every field has a default; a JSON file only needs
/// the fields it overrides (the `dimensions` table is replaced as a whole).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    pub dimensions: DimensionMap<DimensionSettings>,

    /// Confidence reported for a dimension with no answered question.
    pub empty_confidence: f64,

    /// Values above this count as "high" for tensions, growth and insights.
    pub high_threshold: f64,
    /// Values below this count as "low".
    pub low_threshold: f64,

    /// A secondary profile is reported only when it trails the primary by
    /// less than this many match points.
    pub secondary_gap_threshold: f64,

    /// Dimensions below this confidence are flagged as uncertain.
    pub low_confidence_threshold: f64,

    /// Bias scores above this trigger a calibration insight.
    pub bias_insight_threshold: f64,

    pub max_tensions: usize,
    pub max_growth_areas: usize,
    pub max_insights: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            dimensions: default_dimension_settings(),
            empty_confidence: 0.05,
            high_threshold: 3.5,
            low_threshold: 2.5,
            secondary_gap_threshold: 10.0,
            low_confidence_threshold: 0.5,
            bias_insight_threshold: 6.0,
            max_tensions: 3,
            max_growth_areas: 3,
            max_insights: 5,
        }
    }
}

impl ScoringConfig {
    pub fn settings(&self, dim: Dimension) -> &DimensionSettings {
        self.dimensions.get(dim)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for (dim, s) in self.dimensions.iter() {
            let p = s.population;
            if !p.mean.is_finite() || !(1.0..=5.0).contains(&p.mean) {
                return Err(ScoringError::invalid_config(format!(
                    "{dim}: population mean must be in [1,5]"
                )));
            }
            if !p.std_dev.is_finite() || p.std_dev < 0.0 {
                return Err(ScoringError::invalid_config(format!(
                    "{dim}: population stdDev must be >= 0"
                )));
            }
            if !s.sensitivity.is_finite() || !(0.0..=4.0).contains(&s.sensitivity) {
                return Err(ScoringError::invalid_config(format!(
                    "{dim}: sensitivity must be in [0,4]"
                )));
            }
            if !s.neutral_default.is_finite() || !(1.0..=5.0).contains(&s.neutral_default) {
                return Err(ScoringError::invalid_config(format!(
                    "{dim}: neutralDefault must be in [1,5]"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.empty_confidence) {
            return Err(ScoringError::invalid_config(
                "emptyConfidence must be in [0,1]",
            ));
        }
        if !(1.0..=5.0).contains(&self.low_threshold)
            || !(1.0..=5.0).contains(&self.high_threshold)
            || self.low_threshold >= self.high_threshold
        {
            return Err(ScoringError::invalid_config(
                "thresholds must satisfy 1 <= lowThreshold < highThreshold <= 5",
            ));
        }
        if !self.secondary_gap_threshold.is_finite() || self.secondary_gap_threshold < 0.0 {
            return Err(ScoringError::invalid_config(
                "secondaryGapThreshold must be >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(ScoringError::invalid_config(
                "lowConfidenceThreshold must be in [0,1]",
            ));
        }
        if !(0.0..=10.0).contains(&self.bias_insight_threshold) {
            return Err(ScoringError::invalid_config(
                "biasInsightThreshold must be in [0,10]",
            ));
        }
        Ok(())
    }
}

/// Read, parse and validate a JSON scoring config.
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<ScoringConfig, ScoringError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let config: ScoringConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}
