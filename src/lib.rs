//! # cva-engine: Monte Carlo Counterparty Credit Risk
//!
//! A Rust library for estimating counterparty credit risk adjustments,
//! Credit Valuation Adjustment (CVA) and Debit Valuation Adjustment (DVA),
//! for a single exposure driven by a lognormal underlying (an FX rate or
//! rate index).
//!
//! ## Pipeline
//!
//! 1. **Path simulation**: parallel Monte Carlo of the underlying under
//!    Geometric Brownian Motion, using the exact lognormal transition.
//! 2. **Exposure reduction**: collapse the path matrix into time-indexed
//!    EE / EPE / ENE profiles.
//! 3. **Curve construction**: survival probabilities from a flat hazard
//!    rate, discount factors from a flat risk-free rate.
//! 4. **Integration**: exposure × marginal default probability × discount
//!    factor, summed over the grid and scaled by LGD.
//!
//! ## Quick Start
//!
//! ```rust
//! use cva_engine::exposure::simulator::{simulate_forward_paths, SimulationConfig};
//! use cva_engine::exposure::profile::calculate_expected_exposure;
//! use cva_engine::credit::curves::{bootstrap_survival_curve, compute_discount_factors};
//! use cva_engine::credit::adjustments::{compute_cva, compute_dva};
//!
//! let cfg = SimulationConfig {
//!     s0: 100.0,       // Initial underlying value
//!     mu: 0.01,        // Risk-neutral drift
//!     sigma: 0.2,      // Volatility
//!     t: 1.0,          // Maturity in years
//!     num_paths: 10_000,
//!     num_steps: 250,  // Daily grid
//!     seed: Some(42),
//! };
//!
//! let (paths, time_grid) = simulate_forward_paths(&cfg).expect("Valid configuration");
//! let profile = calculate_expected_exposure(&paths);
//!
//! let survival = bootstrap_survival_curve(0.02, &time_grid).expect("Valid hazard rate");
//! let discount = compute_discount_factors(0.01, &time_grid).expect("Valid rate");
//!
//! let cva = compute_cva(&profile.epe, &survival, &discount, 0.6).expect("Aligned inputs");
//! let dva = compute_dva(&profile.ene, &survival, &discount, 0.6).expect("Aligned inputs");
//! println!("CVA: {:.4}  DVA: {:.4}", cva, dva);
//! ```
//!
//! ## Mathematical Foundation
//!
//! CVA is the discrete quadrature of the continuous integral
//! ∫ EPE(t) · LGD · dPD(t) · DF(t), evaluated on the simulation grid with
//! marginal default probabilities taken from a flat-hazard survival curve.
//! DVA mirrors CVA on the absolute value of the negative exposure leg.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod exposure;
pub mod credit;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{CcrError, CcrResult};
