//! CLI for SYCkLe
//!
//! Subcommands:
//! - ls: list compute platforms and devices
//! - vector: elementwise vector addition
//! - blur: box blur of a PNG image
//! - nn: neural network inference (not available)

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::convert::Infallible;
use std::path::PathBuf;
use std::process::ExitCode;
use syckle_compute::{DevicePreference, PlatformRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod io;
mod output;

use config::{FileConfig, Settings};

#[derive(Parser)]
#[command(name = "syckle")]
#[command(about = "SYCkLe - SYCL-style tool for device listing, vector operations and image blur", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Device to run on (auto, gpu, cpu, accelerator) [default: gpu]
    #[arg(short, long, global = true, env = "SYCKLE_DEVICE", value_parser = parse_device)]
    device: Option<DevicePreference>,

    /// Host worker threads (0 = one per core)
    #[arg(long, global = true, env = "SYCKLE_THREADS")]
    threads: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available platforms and devices
    Ls,

    /// Add two integer vectors read from a file
    Vector(commands::vector::VectorArgs),

    /// Apply a box blur to a PNG image
    Blur(commands::blur::BlurArgs),

    /// Run neural network inference
    Nn(commands::nn::NnArgs),
}

fn parse_device(s: &str) -> std::result::Result<DevicePreference, Infallible> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let file = cli
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let settings = Settings::resolve(file, cli.device, cli.threads);
    settings.validate()?;

    match command {
        Commands::Ls => commands::ls::run(&discover(&settings)?),
        Commands::Vector(args) => commands::vector::run(args, &settings, &discover(&settings)?),
        Commands::Blur(args) => commands::blur::run(args, &settings, &discover(&settings)?),
        Commands::Nn(args) => commands::nn::run(args, &settings),
    }
}

fn discover(settings: &Settings) -> Result<PlatformRegistry> {
    PlatformRegistry::discover(&settings.runtime).context("Failed to initialize platforms")
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
