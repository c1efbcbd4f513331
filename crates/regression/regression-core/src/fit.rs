//! Per-entity ordinary least squares
//!
//! Fits `value = intercept + slope * year` for every entity of a training
//! set and keeps the entities whose adjusted R² strictly exceeds a
//! threshold.
//!
//! ## Quality gate
//!
//! The adjusted coefficient of determination
//! `1 - (1 - R²)(n - 1)/(n - p - 1)` with `p = 1` is only defined for
//! `n >= 3`. A two-point line always fits perfectly but has no defined
//! adjusted R², so such entities are excluded as insufficient data rather
//! than waved through.

use regression_spi::{
    Dataset, Exclusion, ExclusionReason, FitReport, FittedModel, GroupFitter, ModelCollection,
    Observation, RegressionError, Result,
};
use tracing::{debug, info};

/// Number of predictors in the model (year).
pub const PREDICTORS: usize = 1;

/// Observations needed to draw a line.
pub const MIN_LINE_OBSERVATIONS: usize = 2;

/// Observations needed for a defined adjusted R².
pub const MIN_SCORED_OBSERVATIONS: usize = PREDICTORS + 2;

/// Fit one entity's observations by OLS.
///
/// Sums are accumulated around the mean year, which keeps the normal
/// equations well conditioned for calendar years; the returned intercept is
/// on the raw-year scale.
///
/// # Errors
///
/// - [`RegressionError::InsufficientData`] for fewer than two observations
/// - [`RegressionError::DegenerateYears`] when every year is the same
/// - [`RegressionError::InvalidData`] for non-finite values, or sums that
///   overflow
pub fn fit_entity<'a, I>(entity: &str, observations: I) -> Result<FittedModel>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let points: Vec<(f64, f64)> = observations
        .into_iter()
        .map(|o| (f64::from(o.year), o.value))
        .collect();

    if points.len() < MIN_LINE_OBSERVATIONS {
        return Err(RegressionError::InsufficientData {
            required: MIN_LINE_OBSERVATIONS,
            actual: points.len(),
        });
    }
    if points.iter().any(|&(_, y)| !y.is_finite()) {
        return Err(RegressionError::InvalidData(format!(
            "non-finite value for entity '{entity}'"
        )));
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let sxx: f64 = points.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = points
        .iter()
        .map(|&(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    // Distinct integer years give sxx >= 0.5.
    if sxx < 1e-10 {
        return Err(RegressionError::DegenerateYears {
            entity: entity.to_string(),
        });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = points
        .iter()
        .map(|&(x, y)| (y - (mean_y + slope * (x - mean_x))).powi(2))
        .sum();

    if ![slope, intercept, ss_tot, ss_res].iter().all(|v| v.is_finite()) {
        return Err(RegressionError::InvalidData(format!(
            "fit statistics for entity '{entity}' overflow"
        )));
    }

    // Constant series: every deviation is within rounding of the mean, and
    // the flat line explains it exactly.
    let tolerance = n * (4.0 * f64::EPSILON * mean_y.abs()).powi(2);
    let r_squared = if ss_tot > tolerance {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    };

    Ok(FittedModel::new(
        entity,
        intercept,
        slope,
        r_squared,
        adjusted_r_squared(r_squared, points.len()),
        points.len(),
    ))
}

/// Adjusted R² for one predictor, `None` when `n - p - 1 < 1`.
pub fn adjusted_r_squared(r_squared: f64, n: usize) -> Option<f64> {
    let dof = n.checked_sub(PREDICTORS + 1).filter(|&d| d >= 1)?;
    Some(1.0 - (1.0 - r_squared) * (n - 1) as f64 / dof as f64)
}

/// Fit every entity in `train` and record why the dropped ones were dropped.
///
/// Entities are retained only when their adjusted R² is strictly greater
/// than `quality_threshold`. A NaN threshold retains nothing.
pub fn fit_report(train: &Dataset, quality_threshold: f64) -> FitReport {
    let mut models = ModelCollection::new();
    let mut excluded = Vec::new();

    for (entity, observations) in train.group_by_entity() {
        match classify(entity, &observations, quality_threshold) {
            Ok(model) => {
                models.insert(model);
            }
            Err(reason) => {
                debug!(entity, %reason, "entity excluded from model collection");
                excluded.push(Exclusion {
                    entity: entity.to_string(),
                    reason,
                });
            }
        }
    }

    info!(
        retained = models.len(),
        excluded = excluded.len(),
        threshold = quality_threshold,
        "fitted per-entity trend models"
    );

    FitReport { models, excluded }
}

/// Fit every entity in `train`, keeping those above `quality_threshold`.
///
/// Convenience over [`fit_report`] when the exclusions are not needed.
pub fn fit_models(train: &Dataset, quality_threshold: f64) -> ModelCollection {
    fit_report(train, quality_threshold).models
}

fn classify(
    entity: &str,
    observations: &[&Observation],
    threshold: f64,
) -> std::result::Result<FittedModel, ExclusionReason> {
    let insufficient = ExclusionReason::InsufficientData {
        required: MIN_SCORED_OBSERVATIONS,
        actual: observations.len(),
    };
    if observations.len() < MIN_SCORED_OBSERVATIONS {
        return Err(insufficient);
    }

    let model = match fit_entity(entity, observations.iter().copied()) {
        Ok(model) => model,
        Err(RegressionError::DegenerateYears { .. }) => {
            return Err(ExclusionReason::DegenerateYears)
        }
        Err(RegressionError::InvalidData(_)) => return Err(ExclusionReason::NonFiniteValue),
        Err(_) => return Err(insufficient),
    };

    match model.quality_score() {
        Some(score) if score > threshold => Ok(model),
        Some(score) => Err(ExclusionReason::LowQualityFit {
            adjusted_r_squared: score,
            threshold,
        }),
        None => Err(insufficient),
    }
}

/// [`GroupFitter`] with a fixed quality threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlsFitter {
    quality_threshold: f64,
}

impl OlsFitter {
    /// Create a fitter retaining models with adjusted R² above `quality_threshold`.
    pub fn new(quality_threshold: f64) -> Result<Self> {
        if !quality_threshold.is_finite() {
            return Err(RegressionError::invalid_parameter(
                "quality_threshold",
                "must be a finite number",
            ));
        }
        Ok(Self { quality_threshold })
    }

    pub fn quality_threshold(&self) -> f64 {
        self.quality_threshold
    }
}

impl GroupFitter for OlsFitter {
    fn fit(&self, train: &Dataset) -> FitReport {
        fit_report(train, self.quality_threshold)
    }
}
