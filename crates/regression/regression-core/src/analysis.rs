//! Split → fit → evaluate, driven by an [`AnalysisProfile`]
//!
//! An [`Analysis`] is built once per dataset load and then answers any
//! number of prediction requests without recomputation.

use crate::evaluate::evaluate;
use crate::fit::OlsFitter;
use crate::predict::predict;
use crate::split::HoldoutSplitter;
use regression_api::AnalysisProfile;
use regression_spi::{
    Dataset, Evaluation, FitReport, GroupFitter, GroupSplitter, ModelCollection, Result, Split,
};
use serde::Serialize;
use tracing::info;

/// Fitted state for one dataset under one profile.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    profile: AnalysisProfile,
    split: Split,
    report: FitReport,
    evaluation: Evaluation,
}

impl Analysis {
    /// Split `dataset`, fit the training part and score the held-out part.
    pub fn run(dataset: &Dataset, profile: AnalysisProfile) -> Result<Self> {
        profile.validate()?;

        let splitter = HoldoutSplitter::new(profile.holdout)?;
        let fitter = OlsFitter::new(profile.quality_threshold)?;

        let split = splitter.split(dataset)?;
        let report = fitter.fit(&split.train);
        let evaluation = evaluate(&report.models, &split.test);

        info!(
            profile = %profile.name,
            observations = dataset.len(),
            train = split.train.len(),
            test = split.test.len(),
            models = report.models.len(),
            "analysis complete"
        );

        Ok(Self {
            profile,
            split,
            report,
            evaluation,
        })
    }

    pub fn profile(&self) -> &AnalysisProfile {
        &self.profile
    }

    pub fn split(&self) -> &Split {
        &self.split
    }

    pub fn report(&self) -> &FitReport {
        &self.report
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Retained models.
    pub fn models(&self) -> &ModelCollection {
        &self.report.models
    }

    /// Entities that can be predicted, sorted.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.report.models.entities()
    }

    /// Prediction rounded to the profile's precision.
    pub fn predict(&self, entity: &str, year: i32) -> Result<f64> {
        predict(self.models(), entity, year, self.profile.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regression_api::AnalysisProfileBuilder;
    use regression_spi::{Observation, RegressionError};

    fn dataset() -> Dataset {
        let mut rows: Vec<Observation> = (1990..2000)
            .map(|y| Observation::new("Brazil", y, 5000.0 - 2.0 * f64::from(y)))
            .collect();
        rows.push(Observation::new("Tuvalu", 2000, 1.0));
        rows.into_iter().collect()
    }

    #[test]
    fn test_run_and_predict() {
        let analysis = Analysis::run(&dataset(), AnalysisProfile::net_conversion()).unwrap();

        assert_eq!(analysis.split().test.len(), 2);
        assert_eq!(analysis.entities().collect::<Vec<_>>(), vec!["Brazil"]);
        assert_eq!(analysis.predict("Brazil", 2050).unwrap(), 900.0);
        assert_eq!(analysis.evaluation().rows.len(), 1);
        assert!(analysis.evaluation().mae.unwrap() < 1e-6);
        assert_eq!(analysis.evaluation().unscored, vec!["Tuvalu".to_string()]);
    }

    #[test]
    fn test_missing_entity() {
        let analysis = Analysis::run(&dataset(), AnalysisProfile::forest_area()).unwrap();
        assert!(matches!(
            analysis.predict("Tuvalu", 2030),
            Err(RegressionError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut profile = AnalysisProfileBuilder::default().build().unwrap();
        profile.holdout = 0;
        assert!(Analysis::run(&dataset(), profile).is_err());
    }
}
