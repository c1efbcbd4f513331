//! Group fitter trait definition.

use crate::model::{Dataset, FitReport};

/// Fits one model per entity and keeps only those that clear a quality gate.
///
/// Entities that cannot be fitted or fit poorly are not errors; they are
/// listed in [`FitReport::excluded`] and are absent from the collection.
///
/// # Example
///
/// ```rust,ignore
/// use regression_spi::{Dataset, GroupFitter, GroupSplitter};
///
/// fn train<S: GroupSplitter, F: GroupFitter>(s: &S, f: &F, data: &Dataset) {
///     let split = s.split(data).unwrap();
///     let report = f.fit(&split.train);
///     println!("{} models kept", report.models.len());
/// }
/// ```
pub trait GroupFitter {
    /// Fit every entity present in `train`.
    fn fit(&self, train: &Dataset) -> FitReport;
}
