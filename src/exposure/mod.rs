// src/exposure/mod.rs
pub mod profile;
pub mod simulator;

pub use profile::{calculate_expected_exposure, ExposureProfile};
pub use simulator::{simulate_forward_paths, SimulationConfig};
