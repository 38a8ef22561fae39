// src/error.rs
use std::fmt;

/// Custom error types for the cva-engine library
#[derive(Debug, Clone)]
pub enum CcrError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Numerical instability (overflow, non-finite results)
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for CcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CcrError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            CcrError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            CcrError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for CcrError {}

/// Result type alias for cva-engine operations
pub type CcrResult<T> = Result<T, CcrError>;

/// Validation utilities
pub mod validation {
    use super::{CcrError, CcrResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> CcrResult<()> {
        if value <= 0.0 || !value.is_finite() {
            Err(CcrError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> CcrResult<()> {
        if value < 0.0 || !value.is_finite() {
            Err(CcrError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> CcrResult<()> {
        if !value.is_finite() {
            Err(CcrError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> CcrResult<()> {
        if value < min || value > max || !value.is_finite() {
            Err(CcrError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> CcrResult<()> {
        if paths == 0 {
            Err(CcrError::InvalidConfiguration {
                field: "num_paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(CcrError::InvalidConfiguration {
                field: "num_paths".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> CcrResult<()> {
        if steps == 0 {
            Err(CcrError::InvalidConfiguration {
                field: "num_steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 100_000 {
            Err(CcrError::InvalidConfiguration {
                field: "num_steps".to_string(),
                reason: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that two sequences passed to the integrator are aligned
    pub fn validate_same_length(
        name_a: &str,
        len_a: usize,
        name_b: &str,
        len_b: usize,
    ) -> CcrResult<()> {
        if len_a != len_b {
            Err(CcrError::InvalidConfiguration {
                field: name_b.to_string(),
                reason: format!(
                    "length {} does not match {} length {}",
                    len_b, name_a, len_a
                ),
            })
        } else {
            Ok(())
        }
    }
}
