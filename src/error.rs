//! Error types for evaluation and input loading

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;

/// Precondition failures detected by the checked evaluation path.
///
/// The unchecked formulas never produce these; they return whatever the
/// arithmetic yields, including `NaN` and infinities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("input field `{field}` is not a finite number")]
    NonFiniteInput { field: &'static str },

    #[error("loan term must be positive, got {term_years} years")]
    NonPositiveTerm { term_years: f64 },

    #[error("loan rate must not be negative, got {rate_pct}%")]
    NegativeRate { rate_pct: f64 },

    #[error("loan principal must not be negative, got {principal}")]
    NegativePrincipal { principal: f64 },

    #[error("total acquisition cost must be positive, got {total}")]
    NonPositiveAcquisitionCost { total: f64 },

    #[error("computed `{field}` is not a finite number")]
    NonFiniteResult { field: &'static str },
}

/// Failures while reading investment inputs from disk or a reader.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
