//! Blur command implementation

use crate::commands::existing_file;
use crate::config::Settings;
use crate::io::{self, image_file, report};
use crate::output;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use syckle_compute::{dispatch, PlatformRegistry};

/// Largest accepted blur radius
pub const MAX_RADIUS: u32 = 20;

#[derive(Args, Debug)]
pub struct BlurArgs {
    /// Input PNG image
    #[arg(short, long, value_parser = existing_file)]
    pub input: PathBuf,

    /// Output PNG image
    #[arg(short, long, default_value = "output_blurred.png")]
    pub output: PathBuf,

    /// Blur radius in pixels (1-20)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=MAX_RADIUS as i64))]
    pub radius: u32,

    /// Also export the profiling report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: BlurArgs, settings: &Settings, registry: &PlatformRegistry) -> Result<()> {
    let image = image_file::load_png(&args.input)?;

    let result = dispatch::box_blur(registry, settings.device, &image, args.radius)?;
    if result.fell_back {
        output::fallback(settings.device, &result.report.device);
    }
    output::device(&result.report.device);
    output::report(&result.report);

    let mut staged = vec![image_file::stage_png(&args.output, &result.output)?];
    if let Some(path) = &args.json {
        staged.push(report::stage_json(&result.report, path)?);
    }
    io::commit_all(staged)?;

    output::success(&format!("Blurred image written to {}", args.output.display()));
    Ok(())
}
