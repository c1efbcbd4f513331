//! Analysis profile configuration.

use regression_spi::{RegressionError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Adjusted R² a model must strictly exceed to be retained.
pub const DEFAULT_QUALITY_THRESHOLD: f64 = 0.6;

/// Earliest year offered for prediction.
pub const MIN_SELECTABLE_YEAR: i32 = 1980;

/// Latest year offered for prediction.
pub const MAX_SELECTABLE_YEAR: i32 = 2080;

/// Settings for one split → fit → predict analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisProfile {
    /// Human readable name of the measured quantity
    pub name: String,
    /// Unit printed after predicted values
    pub unit: String,
    /// Most recent observations per entity held out for evaluation
    pub holdout: usize,
    /// Adjusted R² gate (exclusive lower bound)
    pub quality_threshold: f64,
    /// Decimal places of reported predictions
    pub precision: u32,
    /// First year that may be requested
    pub min_year: i32,
    /// Last year that may be requested
    pub max_year: i32,
}

impl AnalysisProfile {
    /// Net forest conversion in hectares: one year held out, two decimals.
    pub fn net_conversion() -> Self {
        Self {
            name: "Net forest conversion".to_string(),
            unit: "ha".to_string(),
            holdout: 1,
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            precision: 2,
            min_year: MIN_SELECTABLE_YEAR,
            max_year: MAX_SELECTABLE_YEAR,
        }
    }

    /// Share of global forest area in percent: four years held out, five decimals.
    pub fn forest_area() -> Self {
        Self {
            name: "Share of global forest area".to_string(),
            unit: "%".to_string(),
            holdout: 4,
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            precision: 5,
            min_year: MIN_SELECTABLE_YEAR,
            max_year: MAX_SELECTABLE_YEAR,
        }
    }

    /// Selectable prediction years.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    /// Whether `year` may be requested.
    pub fn contains_year(&self, year: i32) -> bool {
        self.year_range().contains(&year)
    }

    /// Check parameter consistency.
    pub fn validate(&self) -> Result<()> {
        if self.holdout == 0 {
            return Err(RegressionError::invalid_parameter(
                "holdout",
                "must be at least 1",
            ));
        }
        if !self.quality_threshold.is_finite() {
            return Err(RegressionError::invalid_parameter(
                "quality_threshold",
                "must be a finite number",
            ));
        }
        if self.min_year > self.max_year {
            return Err(RegressionError::invalid_parameter(
                "min_year",
                format!("{} is after max_year {}", self.min_year, self.max_year),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self::net_conversion()
    }
}

/// Builder for [`AnalysisProfile`], starting from a preset.
#[derive(Debug, Clone)]
pub struct AnalysisProfileBuilder {
    profile: AnalysisProfile,
}

impl AnalysisProfileBuilder {
    /// Start from `base`.
    pub fn from_profile(base: AnalysisProfile) -> Self {
        Self { profile: base }
    }

    /// Set the name.
    pub fn name(mut self, name: &str) -> Self {
        self.profile.name = name.to_string();
        self
    }

    /// Set the unit.
    pub fn unit(mut self, unit: &str) -> Self {
        self.profile.unit = unit.to_string();
        self
    }

    /// Set the hold-out count.
    pub fn holdout(mut self, holdout: usize) -> Self {
        self.profile.holdout = holdout;
        self
    }

    /// Set the quality threshold.
    pub fn quality_threshold(mut self, threshold: f64) -> Self {
        self.profile.quality_threshold = threshold;
        self
    }

    /// Set the rounding precision.
    pub fn precision(mut self, precision: u32) -> Self {
        self.profile.precision = precision;
        self
    }

    /// Set the selectable year range.
    pub fn years(mut self, min_year: i32, max_year: i32) -> Self {
        self.profile.min_year = min_year;
        self.profile.max_year = max_year;
        self
    }

    /// Validate and build the profile.
    pub fn build(self) -> Result<AnalysisProfile> {
        self.profile.validate()?;
        Ok(self.profile)
    }
}

impl Default for AnalysisProfileBuilder {
    fn default() -> Self {
        Self::from_profile(AnalysisProfile::default())
    }
}
