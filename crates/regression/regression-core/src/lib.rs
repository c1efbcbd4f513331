//! Regression Core Implementations
//!
//! Pure functions over immutable datasets:
//!
//! - `split`: hold out the most recent years of each entity
//! - `fit`: per-entity OLS with an adjusted R² quality gate
//! - `predict`: rounded point predictions, extrapolation allowed
//! - `evaluate`: accuracy of retained models on held-out years
//! - `analysis`: the whole pipeline driven by an `AnalysisProfile`
//!
//! ## Example
//!
//! ```rust
//! use regression_core::prelude::*;
//!
//! let data: Dataset = (2000..2010)
//!     .map(|y| Observation::new("Peru", y, 1.5 * f64::from(y - 2000)))
//!     .collect();
//!
//! let split = split(&data, 1).unwrap();
//! let models = fit_models(&split.train, 0.6);
//! assert_eq!(predict(&models, "Peru", 2020, 2).unwrap(), 30.0);
//! ```

pub mod analysis;
pub mod evaluate;
pub mod fit;
pub mod metrics;
pub mod predict;
pub mod split;

// Re-export from SPI
pub use regression_spi::{RegressionError, Result};

pub use analysis::Analysis;
pub use evaluate::evaluate;
pub use fit::{fit_entity, fit_models, fit_report, OlsFitter};
pub use predict::{predict, round_to};
pub use split::{split, HoldoutSplitter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analysis::Analysis;
    pub use crate::evaluate::evaluate;
    pub use crate::fit::{fit_entity, fit_models, fit_report, OlsFitter};
    pub use crate::predict::predict;
    pub use crate::split::{split, HoldoutSplitter};
    pub use regression_api::{AnalysisProfile, AnalysisProfileBuilder};
    pub use regression_spi::{
        Dataset, FitReport, FittedModel, GroupFitter, GroupSplitter, ModelCollection,
        Observation, RegressionError, Result, Split,
    };
}
