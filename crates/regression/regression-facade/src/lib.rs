//! Regression Facade
//!
//! High-level API for per-entity trend regression. Re-exports all public
//! types from the regression stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use regression_facade::prelude::*;
//!
//! let data: Dataset = (1990..2000)
//!     .map(|y| Observation::new("Chile", y, 20.0 + 0.1 * f64::from(y - 1990)))
//!     .collect();
//!
//! let analysis = Analysis::run(&data, AnalysisProfile::forest_area()).unwrap();
//! assert!(analysis.models().contains("Chile"));
//! ```

// Re-export everything from core (includes implementations)
pub use regression_core::*;

// Re-export from API for completeness (mostly overlaps with core re-exports)
#[allow(unused_imports)]
pub use regression_api::*;

// Explicit re-exports for documentation
pub use regression_core::prelude;
