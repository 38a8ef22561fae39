// src/credit/curves.rs
//! Survival and Discount Curve Construction
//!
//! # Mathematical Framework
//!
//! Both curves are flat-parameter exponentials evaluated pointwise on the
//! simulation time grid:
//! ```text
//! survival(t) = exp(-λ t)     λ = flat hazard rate, λ ≥ 0
//! discount(t) = exp(-r t)     r = flat risk-free rate, any real
//! ```
//!
//! Since the grid starts at t = 0, both sequences begin at exactly 1.0.
//! Survival probabilities are non-increasing; a negative hazard rate would
//! break that invariant and is rejected. Negative rates are economically
//! valid for discounting and are accepted (discount factors then exceed 1).

use crate::error::{validation::*, CcrResult};

/// Build survival probabilities from a flat hazard rate
///
/// # Errors
///
/// Returns `CcrError::InvalidParameters` if `hazard_rate` is negative or
/// non-finite, before touching the grid.
pub fn bootstrap_survival_curve(hazard_rate: f64, time_grid: &[f64]) -> CcrResult<Vec<f64>> {
    validate_non_negative("hazard_rate", hazard_rate)?;
    Ok(time_grid.iter().map(|&t| (-hazard_rate * t).exp()).collect())
}

/// Build discount factors from a flat continuously-compounded rate
///
/// # Errors
///
/// Returns `CcrError::InvalidParameters` if `r` is non-finite. Negative
/// rates are accepted.
pub fn compute_discount_factors(r: f64, time_grid: &[f64]) -> CcrResult<Vec<f64>> {
    validate_finite("r", r)?;
    Ok(time_grid.iter().map(|&t| (-r * t).exp()).collect())
}
