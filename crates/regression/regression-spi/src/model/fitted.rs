//! Fitted model and model collection types.

use crate::error::{RegressionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordinary least-squares line `value = intercept + slope * year`
/// fitted to one entity's training observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    entity: String,
    intercept: f64,
    slope: f64,
    r_squared: f64,
    /// `None` when `n - 2 < 1`, where the adjustment is undefined
    adjusted_r_squared: Option<f64>,
    n_observations: usize,
}

impl FittedModel {
    /// Assemble a fitted model from its coefficients and scores.
    pub fn new(
        entity: impl Into<String>,
        intercept: f64,
        slope: f64,
        r_squared: f64,
        adjusted_r_squared: Option<f64>,
        n_observations: usize,
    ) -> Self {
        Self {
            entity: entity.into(),
            intercept,
            slope,
            r_squared,
            adjusted_r_squared,
            n_observations,
        }
    }

    /// Entity this model belongs to
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Value at year zero
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Change in value per year
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Coefficient of determination
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Adjusted coefficient of determination, if defined
    pub fn adjusted_r_squared(&self) -> Option<f64> {
        self.adjusted_r_squared
    }

    /// Number of training observations
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Quality score used by the retention gate (adjusted R²).
    pub fn quality_score(&self) -> Option<f64> {
        self.adjusted_r_squared
    }

    /// Unrounded prediction for `year`. Extrapolation is allowed.
    pub fn predict_at(&self, year: i32) -> f64 {
        self.intercept + self.slope * f64::from(year)
    }
}

/// Mapping from entity to its retained [`FittedModel`].
///
/// Immutable once built; entity keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCollection {
    models: BTreeMap<String, FittedModel>,
}

impl ModelCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model keyed by its entity, replacing any previous one.
    pub fn insert(&mut self, model: FittedModel) -> Option<FittedModel> {
        self.models.insert(model.entity.clone(), model)
    }

    /// Model for `entity`, if one was retained.
    pub fn get(&self, entity: &str) -> Option<&FittedModel> {
        self.models.get(entity)
    }

    /// Model for `entity`, or [`RegressionError::ModelNotFound`].
    pub fn model(&self, entity: &str) -> Result<&FittedModel> {
        self.get(entity).ok_or_else(|| RegressionError::ModelNotFound {
            entity: entity.to_string(),
        })
    }

    /// Whether `entity` has a retained model.
    pub fn contains(&self, entity: &str) -> bool {
        self.models.contains_key(entity)
    }

    /// Entity keys in sorted order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Models in entity order.
    pub fn iter(&self) -> impl Iterator<Item = &FittedModel> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<FittedModel> for ModelCollection {
    fn from_iter<I: IntoIterator<Item = FittedModel>>(iter: I) -> Self {
        let mut collection = Self::new();
        for model in iter {
            collection.insert(model);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(entity: &str, intercept: f64, slope: f64) -> FittedModel {
        FittedModel::new(entity, intercept, slope, 0.9, Some(0.85), 5)
    }

    #[test]
    fn test_predict_at() {
        let m = model("Peru", -100.0, 0.5);
        assert!((m.predict_at(2000) - 900.0).abs() < 1e-12);
        assert!((m.predict_at(2080) - 940.0).abs() < 1e-12);
    }

    #[test]
    fn test_quality_score_is_adjusted_r_squared() {
        let m = model("Peru", 0.0, 1.0);
        assert_eq!(m.quality_score(), Some(0.85));
    }

    #[test]
    fn test_collection_lookup() {
        let collection: ModelCollection =
            vec![model("Peru", 0.0, 1.0), model("Chad", 1.0, 0.0)].into_iter().collect();

        assert_eq!(collection.len(), 2);
        assert!(collection.contains("Chad"));
        assert_eq!(collection.model("Peru").unwrap().slope(), 1.0);
        assert_eq!(collection.entities().collect::<Vec<_>>(), vec!["Chad", "Peru"]);
    }

    #[test]
    fn test_collection_model_not_found() {
        let collection = ModelCollection::new();
        let err = collection.model("Mali").unwrap_err();
        assert_eq!(
            err,
            RegressionError::ModelNotFound {
                entity: "Mali".to_string()
            }
        );
    }

    #[test]
    fn test_insert_replaces_same_entity() {
        let mut collection = ModelCollection::new();
        assert!(collection.insert(model("Peru", 0.0, 1.0)).is_none());
        let previous = collection.insert(model("Peru", 0.0, 2.0));
        assert_eq!(previous.map(|m| m.slope()), Some(1.0));
        assert_eq!(collection.len(), 1);
    }
}
