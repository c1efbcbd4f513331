//! Data model for per-entity regression

mod fitted;
mod observation;
mod report;

pub use fitted::{FittedModel, ModelCollection};
pub use observation::{Dataset, Observation, Split};
pub use report::{Evaluation, Exclusion, ExclusionReason, FitReport, HoldoutRow};
