//! Regression error types
//!
//! Defines the standardized error type for split, fit and predict operations.

use thiserror::Error;

/// Result type alias for regression operations
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors that can occur during regression operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// No model was retained for the requested entity
    #[error("No model available for entity '{entity}'")]
    ModelNotFound { entity: String },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Insufficient observations for the operation
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// All training years are identical, so the slope is undefined
    #[error("Degenerate years for entity '{entity}': all observations share one year")]
    DegenerateYears { entity: String },

    /// Invalid observation data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RegressionError {
    /// Shorthand for [`RegressionError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the entity simply has no model.
    pub fn is_model_not_found(&self) -> bool {
        matches!(self, Self::ModelNotFound { .. })
    }
}
