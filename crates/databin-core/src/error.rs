//! Error types for data binning
//!
//! Provides a unified error type for all databin crates.

use thiserror::Error;

/// Core error type for binning and weight-table operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} distinct values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Input outside the domain of the operation
    #[error("Domain error: {0}")]
    Domain(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Malformed configuration
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a bin count below one
    pub fn invalid_bin_count(bins: usize) -> Self {
        Self::InvalidParameter(format!(
            "the number of bins must be at least 1, got {bins}"
        ))
    }

    /// Create an error for a logarithm base below two
    pub fn invalid_base(base: f64) -> Self {
        Self::InvalidParameter(format!(
            "the base of the logarithm must be at least 2, got {base}"
        ))
    }

    /// Create an error for a table with fewer than two distinct keys
    pub fn insufficient_distinct(actual: usize) -> Self {
        Self::InsufficientData {
            expected: 2,
            actual,
        }
    }

    /// Create an error for a non-positive minimum key in log space
    pub fn non_positive(min: f64) -> Self {
        Self::Domain(format!("data contains non-positive values (minimum {min})"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} must be finite"))
    }

    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}
