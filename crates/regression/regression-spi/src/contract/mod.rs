//! Contracts for the split and fit stages
//!
//! - [`GroupSplitter`]: per-entity train/test partitioning
//! - [`GroupFitter`]: per-entity model fitting with quality filtering

mod fitter;
mod splitter;

pub use fitter::GroupFitter;
pub use splitter::GroupSplitter;
