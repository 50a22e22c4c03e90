//! Console output for CLI commands
//!
//! Results go to stdout; diagnostics go through `tracing` on stderr.

use colored::Colorize;
use syckle_compute::DevicePreference;
use syckle_shared::utils::join_values;
use syckle_shared::{Device, ProfileReport};

/// Print success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a failure and its cause chain
pub fn failure(err: &anyhow::Error) {
    eprintln!("{} {}", "✗".red(), err);
    for cause in err.chain().skip(1) {
        eprintln!("    {} {}", "caused by:".dimmed(), cause);
    }
}

/// Warn that the requested device type was not available
pub fn fallback(requested: DevicePreference, device: &Device) {
    println!(
        "{} No {} device found, using default device: {}",
        "⚠".yellow(),
        requested,
        device
    );
}

/// Print the device a job ran on
pub fn device(device: &Device) {
    println!("Using Device: {}", device.name);
}

/// Print a labelled integer vector on one line
pub fn vector(label: &str, values: &[i32]) {
    println!("{}: {}", label, join_values(values));
}

/// Print a profiling block
pub fn report(report: &ProfileReport) {
    println!("\n{}", report.to_string().bold());
}
