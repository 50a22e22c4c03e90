//! Vector command implementation

use crate::commands::existing_file;
use crate::config::Settings;
use crate::io::{self, report, vector_file};
use crate::output;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use syckle_compute::{dispatch, PlatformRegistry};

#[derive(Args, Debug)]
pub struct VectorArgs {
    /// Input file with two lines of integers
    #[arg(short, long, value_parser = existing_file)]
    pub input: PathBuf,

    /// Output file for the result vector
    #[arg(short, long, default_value = "output_vector.txt")]
    pub output: PathBuf,

    /// Also export the profiling report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: VectorArgs, settings: &Settings, registry: &PlatformRegistry) -> Result<()> {
    let (a, b) = vector_file::read_vectors(&args.input)?;

    let result = dispatch::vector_add(registry, settings.device, &a, &b)?;
    if result.fell_back {
        output::fallback(settings.device, &result.report.device);
    }
    output::device(&result.report.device);

    output::vector("Vector a", &a);
    output::vector("Vector b", &b);
    output::vector("Result vector c", &result.output);
    output::report(&result.report);

    let mut staged = vec![vector_file::stage_vector(&args.output, &result.output)?];
    if let Some(path) = &args.json {
        staged.push(report::stage_json(&result.report, path)?);
    }
    io::commit_all(staged)?;

    output::success(&format!("Result written to {}", args.output.display()));
    Ok(())
}
