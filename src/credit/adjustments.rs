// src/credit/adjustments.rs
//! CVA / DVA Integration
//!
//! # Mathematical Framework
//!
//! CVA is the discrete quadrature of the continuous integral:
//! ```text
//! CVA = LGD * ∫₀ᵀ EPE(t) dPD(t) DF(t)
//!     ≈ LGD * Σᵢ EPE(tᵢ) * [S(tᵢ₋₁) - S(tᵢ)] * DF(tᵢ)
//! ```
//! where S is the survival curve and DF the discount curve, all aligned to
//! the simulation grid. The quadrature error shrinks as the grid is
//! refined; no adaptive step control is performed.
//!
//! # Index-0 Boundary
//!
//! The marginal default probability for the first grid point is measured
//! against a reference survival probability of exactly 1.0 at time 0. With
//! a grid starting at t = 0 the survival curve itself is 1.0 there, so
//! index 0 carries zero default probability and contributes nothing: the
//! "no default before start" convention, kept explicit in the loop below
//! rather than hidden behind an array-differencing helper.
//!
//! # Sign Conventions
//!
//! CVA consumes the EPE leg with the counterparty's LGD. DVA consumes the
//! absolute value of the ENE leg with the firm's own assumed LGD: the
//! exposure sign convention for DVA is the mirror image of CVA, since the
//! firm is short its own default risk on the negative part of the exposure.

use crate::error::{validation::*, CcrResult};

/// Marginal default probabilities per grid interval
///
/// `dp[i] = survival[i-1] - survival[i]`, with an implicit 1.0 reference
/// at index 0. Over the full grid the entries sum to
/// `1 - survival(maturity)`.
pub fn marginal_default_probabilities(survival_probs: &[f64]) -> Vec<f64> {
    let mut dp = Vec::with_capacity(survival_probs.len());
    let mut prev = 1.0;
    for &s in survival_probs {
        dp.push(prev - s);
        prev = s;
    }
    dp
}

/// Integrate an exposure leg against default probability and discounting
///
/// Computes `lgd * Σᵢ exposure_leg[i] * dp[i] * discount_factors[i]` where
/// `dp` are the marginal default probabilities from `survival_probs`.
///
/// `lgd` is conventionally in `[0, 1]`; values outside that range are a
/// parameter error on the caller's side but are not rejected here; only
/// non-finite values are.
///
/// # Errors
///
/// Returns `CcrError::InvalidConfiguration` when the three sequences have
/// different lengths, before any arithmetic.
pub fn compute_adjustment(
    exposure_leg: &[f64],
    survival_probs: &[f64],
    discount_factors: &[f64],
    lgd: f64,
) -> CcrResult<f64> {
    validate_same_length(
        "exposure_leg",
        exposure_leg.len(),
        "survival_probs",
        survival_probs.len(),
    )?;
    validate_same_length(
        "exposure_leg",
        exposure_leg.len(),
        "discount_factors",
        discount_factors.len(),
    )?;
    validate_finite("lgd", lgd)?;

    let mut sum = 0.0;
    let mut prev_survival = 1.0;
    for i in 0..exposure_leg.len() {
        let marginal_dp = prev_survival - survival_probs[i];
        sum += exposure_leg[i] * marginal_dp * discount_factors[i];
        prev_survival = survival_probs[i];
    }

    Ok(sum * lgd)
}

/// Credit Valuation Adjustment from the EPE leg
///
/// `lgd` is the counterparty's loss given default.
pub fn compute_cva(
    epe: &[f64],
    survival_probs: &[f64],
    discount_factors: &[f64],
    lgd: f64,
) -> CcrResult<f64> {
    compute_adjustment(epe, survival_probs, discount_factors, lgd)
}

/// Debit Valuation Adjustment from the ENE leg
///
/// Takes the absolute value of the (non-positive) ENE leg before
/// integrating; `lgd` is the firm's own assumed loss given default.
pub fn compute_dva(
    ene: &[f64],
    survival_probs: &[f64],
    discount_factors: &[f64],
    lgd: f64,
) -> CcrResult<f64> {
    let abs_ene: Vec<f64> = ene.iter().map(|&v| v.abs()).collect();
    compute_adjustment(&abs_ene, survival_probs, discount_factors, lgd)
}
