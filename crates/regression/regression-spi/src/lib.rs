//! Regression Service Provider Interface
//!
//! Defines the data model, contracts and error type shared by the
//! per-entity trend regression stack.
//!
//! - [`Observation`] / [`Dataset`]: `(entity, year, value)` rows
//! - [`FittedModel`] / [`ModelCollection`]: one OLS line per entity
//! - [`GroupSplitter`] / [`GroupFitter`]: the split and fit contracts
//! - [`RegressionError`]: standardized error type

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{GroupFitter, GroupSplitter};
pub use error::{RegressionError, Result};
pub use model::{
    Dataset, Evaluation, Exclusion, ExclusionReason, FitReport, FittedModel, HoldoutRow,
    ModelCollection, Observation, Split,
};
