//! Point predictions from a model collection

use regression_spi::{ModelCollection, Result};

/// Predict `entity`'s value at `year`, rounded to `precision` decimals.
///
/// `year` may lie outside the training range; the fitted line is simply
/// extended.
///
/// # Errors
///
/// [`RegressionError::ModelNotFound`](regression_spi::RegressionError::ModelNotFound)
/// when `entity` has no retained model.
///
/// # Example
///
/// ```rust
/// use regression_core::predict::predict;
/// use regression_spi::{FittedModel, ModelCollection};
///
/// let models: ModelCollection =
///     std::iter::once(FittedModel::new("Peru", -100.0, 0.05, 0.9, Some(0.88), 12)).collect();
///
/// assert_eq!(predict(&models, "Peru", 2050, 2).unwrap(), 2.5);
/// assert!(predict(&models, "Chad", 2050, 2).is_err());
/// ```
pub fn predict(models: &ModelCollection, entity: &str, year: i32, precision: u32) -> Result<f64> {
    let model = models.model(entity)?;
    Ok(round_to(model.predict_at(year), precision))
}

/// Round half away from zero to `precision` decimal places.
///
/// Values whose scaled form would overflow are returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let Ok(exponent) = i32::try_from(precision) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
