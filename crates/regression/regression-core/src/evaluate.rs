//! Holdout evaluation
//!
//! Scores a [`ModelCollection`] against the observations the splitter held
//! out.

use crate::metrics::{mae, mape, rmse};
use regression_spi::{Dataset, Evaluation, HoldoutRow, ModelCollection};
use std::collections::BTreeSet;

/// Score every test observation whose entity has a retained model.
///
/// Test entities without a model are listed in [`Evaluation::unscored`].
/// Aggregate metrics are `None` when nothing could be scored.
pub fn evaluate(models: &ModelCollection, test: &Dataset) -> Evaluation {
    let mut rows = Vec::new();
    let mut unscored = BTreeSet::new();

    for obs in test {
        match models.get(&obs.entity) {
            Some(model) => {
                let predicted = model.predict_at(obs.year);
                rows.push(HoldoutRow {
                    entity: obs.entity.clone(),
                    year: obs.year,
                    actual: obs.value,
                    predicted,
                    residual: obs.value - predicted,
                });
            }
            None => {
                unscored.insert(obs.entity.clone());
            }
        }
    }

    let actual: Vec<f64> = rows.iter().map(|r| r.actual).collect();
    let predicted: Vec<f64> = rows.iter().map(|r| r.predicted).collect();
    let finite = |v: f64| Some(v).filter(|v| v.is_finite());

    Evaluation {
        mae: finite(mae(&actual, &predicted)),
        rmse: finite(rmse(&actual, &predicted)),
        mape: finite(mape(&actual, &predicted)),
        rows,
        unscored: unscored.into_iter().collect(),
    }
}
