//! Forecast accuracy metrics
//!
//! Standard error measures for scoring held-out predictions. Each returns
//! NaN when the slices are empty or differ in length.

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences between predictions and actual values.
/// Same scale as the data.
///
/// # Example
///
/// ```rust
/// use regression_core::metrics::mae;
///
/// let actual = vec![1.0, 2.0, 3.0];
/// let predicted = vec![1.5, 2.0, 2.0];
/// assert_eq!(mae(&actual, &predicted), 0.5);
/// ```
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Mean Squared Error (MSE)
///
/// Penalizes large errors more heavily.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// Root Mean Squared Error (RMSE)
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Mean Absolute Percentage Error (MAPE), as a fraction.
///
/// Pairs whose actual value is zero are skipped; NaN if none remain.
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let (sum, count) = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, _)| a.abs() > 1e-10)
        .fold((0.0, 0usize), |(sum, count), (a, p)| {
            (sum + ((a - p) / a).abs(), count + 1)
        });

    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}
