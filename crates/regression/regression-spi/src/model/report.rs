//! Fit and evaluation report types.

use super::fitted::ModelCollection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an entity did not make it into the [`ModelCollection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Too few training observations for a defined quality score
    InsufficientData { required: usize, actual: usize },
    /// Every training observation shares the same year
    DegenerateYears,
    /// A training value is NaN or infinite, or the fit overflows
    NonFiniteValue,
    /// Quality score at or below the threshold
    LowQualityFit { adjusted_r_squared: f64, threshold: f64 },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { required, actual } => {
                write!(f, "insufficient data ({actual} of {required} observations)")
            }
            Self::DegenerateYears => write!(f, "all observations share one year"),
            Self::NonFiniteValue => write!(f, "non-finite value"),
            Self::LowQualityFit {
                adjusted_r_squared,
                threshold,
            } => write!(
                f,
                "low quality fit (adjusted R² {adjusted_r_squared:.4} <= {threshold})"
            ),
        }
    }
}

/// An entity dropped during fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub entity: String,
    pub reason: ExclusionReason,
}

/// Outcome of fitting every entity of a training set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// Retained models
    pub models: ModelCollection,
    /// Dropped entities in sorted order
    pub excluded: Vec<Exclusion>,
}

impl FitReport {
    /// Number of entities considered.
    pub fn entities_seen(&self) -> usize {
        self.models.len() + self.excluded.len()
    }
}

/// One held-out observation scored against its entity's model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldoutRow {
    pub entity: String,
    pub year: i32,
    pub actual: f64,
    pub predicted: f64,
    /// `actual - predicted`
    pub residual: f64,
}

/// Accuracy of a [`ModelCollection`] on the held-out observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub rows: Vec<HoldoutRow>,
    /// Test entities without a retained model
    pub unscored: Vec<String>,
    pub mae: Option<f64>,
    pub rmse: Option<f64>,
    pub mape: Option<f64>,
}
