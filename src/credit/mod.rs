// src/credit/mod.rs
pub mod adjustments;
pub mod curves;

pub use adjustments::{compute_adjustment, compute_cva, compute_dva};
pub use curves::{bootstrap_survival_curve, compute_discount_factors};
