// src/output.rs
use crate::exposure::profile::ExposureProfile;
use std::fs::File;
use std::io::{self, Write};

/// Write an exposure profile to CSV, one row per time-grid point
pub fn write_exposure_profile_to_csv(
    filename: &str,
    time_grid: &[f64],
    profile: &ExposureProfile,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "time,ee,epe,ene")?;
    for i in 0..profile.len() {
        writeln!(
            file,
            "{},{},{},{}",
            time_grid[i], profile.ee[i], profile.epe[i], profile.ene[i]
        )?;
    }
    Ok(())
}

/// Write a key/value results summary (e.g. CVA/DVA scalars) to CSV
pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
