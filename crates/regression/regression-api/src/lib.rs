//! Regression Consumer API
//!
//! Consumer-facing configuration for the regression domain, plus re-exports
//! of the SPI types.
//!
//! - [`AnalysisProfile`]: hold-out count, quality gate, precision, year range
//! - [`AnalysisProfileBuilder`]: builder over a preset profile

pub mod config;

pub use config::{
    AnalysisProfile, AnalysisProfileBuilder, DEFAULT_QUALITY_THRESHOLD, MAX_SELECTABLE_YEAR,
    MIN_SELECTABLE_YEAR,
};

// Re-export all SPI types
pub use regression_spi::*;
