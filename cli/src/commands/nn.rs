//! Nn command implementation
//!
//! Arguments are accepted and validated, but no inference backend exists.

use crate::commands::existing_file;
use crate::config::Settings;
use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Framework {
    Custom,
    Onnx,
    Tensorflow,
}

#[derive(Args, Debug)]
pub struct NnArgs {
    /// Model file
    #[arg(short, long, value_parser = existing_file)]
    pub model: PathBuf,

    /// Input data file
    #[arg(short, long, value_parser = existing_file)]
    pub input: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "nn_output.txt")]
    pub output: PathBuf,

    /// Model framework
    #[arg(short, long, value_enum, default_value_t = Framework::Custom)]
    pub framework: Framework,

    /// Batch size (1-1024)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1024))]
    pub batch_size: u32,
}

pub fn run(args: NnArgs, settings: &Settings) -> Result<()> {
    debug!(
        model = %args.model.display(),
        input = %args.input.display(),
        output = %args.output.display(),
        framework = ?args.framework,
        batch_size = args.batch_size,
        device = %settings.device,
        "nn requested"
    );
    bail!("neural network inference is not implemented")
}
