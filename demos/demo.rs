// demos/demo.rs
use cva_engine::credit::adjustments::{compute_cva, compute_dva};
use cva_engine::credit::curves::{bootstrap_survival_curve, compute_discount_factors};
use cva_engine::exposure::profile::calculate_expected_exposure;
use cva_engine::exposure::simulator::{simulate_forward_paths, SimulationConfig};
use cva_engine::math_utils::Timer;
use cva_engine::output;

fn main() {
    println!("Running cva-engine Counterparty Credit Risk Demo\n");

    // Parameters
    let cfg = SimulationConfig {
        s0: 100.0,   // Initial asset value
        mu: 0.01,    // Drift (risk-free rate / forward rate)
        sigma: 0.2,  // Volatility
        t: 1.0,      // Maturity in years
        num_paths: 10_000,
        num_steps: 250,
        seed: Some(42),
    };
    let r = 0.01;          // Risk-free rate
    let hazard_rate = 0.02; // Flat hazard rate
    let lgd = 0.6;         // Loss given default

    let mut timer = Timer::new();
    timer.start();

    // Simulate exposure
    let (paths, time_grid) = simulate_forward_paths(&cfg).expect("Valid configuration");
    let profile = calculate_expected_exposure(&paths);

    // Compute survival curve and discount factors
    let survival = bootstrap_survival_curve(hazard_rate, &time_grid).expect("Valid hazard rate");
    let discount = compute_discount_factors(r, &time_grid).expect("Valid rate");

    // Calculate CVA and DVA
    let cva = compute_cva(&profile.epe, &survival, &discount, lgd).expect("Aligned inputs");
    let dva = compute_dva(&profile.ene, &survival, &discount, lgd).expect("Aligned inputs");

    let elapsed_ms = timer.elapsed_ms();

    println!("Counterparty Credit Risk Results");
    println!("----------------------------------");
    println!("CVA: {:.4}", cva);
    println!("DVA: {:.4}", dva);
    println!("({} paths x {} steps in {:.1} ms)", cfg.num_paths, cfg.num_steps, elapsed_ms);

    // Persist the exposure profile for charting
    output::write_exposure_profile_to_csv("exposure_profiles.csv", &time_grid, &profile)
        .expect("Could not write exposure profile");
    println!("Exposure profile written to exposure_profiles.csv");

    let cva_str = format!("{:.6}", cva);
    let dva_str = format!("{:.6}", dva);
    let summary = [("cva", cva_str.as_str()), ("dva", dva_str.as_str())];
    output::write_summary_to_csv("ccr_summary.csv", &summary).expect("Could not write summary");
    println!("CVA/DVA summary written to ccr_summary.csv");
}
