// src/exposure/profile.rs
//! Exposure Profile Reduction
//!
//! Collapses a simulated path matrix into three time-indexed statistics:
//!
//! - **EE** (Expected Exposure): arithmetic mean of the signed value
//! - **EPE** (Expected Positive Exposure): mean of the value clipped to
//!   `[0, +∞)`, the leg the counterparty can default on
//! - **ENE** (Expected Negative Exposure): mean of the value clipped to
//!   `(-∞, 0]`, the leg the firm itself can default on
//!
//! Positive and negative parts partition the signed value, so
//! `EE = EPE + ENE` holds at every index by construction.

use ndarray::{Array2, Axis};

/// Time-indexed exposure statistics, one entry per time-grid point
///
/// Immutable after construction; the CVA/DVA integrator consumes the
/// `epe`/`ene` legs directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureProfile {
    /// Expected exposure (signed mean across paths)
    pub ee: Vec<f64>,
    /// Expected positive exposure, `epe[i] >= 0`
    pub epe: Vec<f64>,
    /// Expected negative exposure, `ene[i] <= 0`
    pub ene: Vec<f64>,
}

impl ExposureProfile {
    /// Number of time-grid points covered by the profile
    pub fn len(&self) -> usize {
        self.ee.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ee.is_empty()
    }
}

/// Reduce a path matrix into an exposure profile
///
/// # Algorithm
///
/// For each time-grid column, a single pass accumulates the signed sum and
/// the positive/negative clipped sums, then divides by the path count. No
/// intermediate clipped matrices are materialized.
///
/// The profile row count equals the matrix column count. `num_paths == 1`
/// is permitted: the profile is then just the clipped single trajectory.
pub fn calculate_expected_exposure(paths: &Array2<f64>) -> ExposureProfile {
    let num_paths = paths.nrows() as f64;
    let num_points = paths.ncols();

    let mut ee = Vec::with_capacity(num_points);
    let mut epe = Vec::with_capacity(num_points);
    let mut ene = Vec::with_capacity(num_points);

    for col in paths.axis_iter(Axis(1)) {
        let mut sum = 0.0;
        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        for &v in col.iter() {
            sum += v;
            if v > 0.0 {
                pos_sum += v;
            } else {
                neg_sum += v;
            }
        }
        ee.push(sum / num_paths);
        epe.push(pos_sum / num_paths);
        ene.push(neg_sum / num_paths);
    }

    ExposureProfile { ee, epe, ene }
}
