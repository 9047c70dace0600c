//! Runs a convergence study and writes the error curves as JSON.

use clap::Parser;
use mcball::callbacks::SimpleCallback;
use mcball::logging::init_tracing;
use mcball::study::{self, parse_dims, StudyConfig};
use mcball::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Convergence of the Monte Carlo volume estimate of d-dimensional balls
#[derive(Parser, Debug)]
#[command(name = "convergence")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (JSON), overridden by the options below
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated dimensions [default: 3,5,10]
    #[arg(long)]
    dims: Option<String>,

    /// Radius of the balls [default: 1.0]
    #[arg(long = "r")]
    radius: Option<f64>,

    /// Smallest sample size is 2^kmin [default: 1]
    #[arg(long)]
    kmin: Option<u32>,

    /// Largest sample size is 2^kmax [default: 16]
    #[arg(long)]
    kmax: Option<u32>,

    /// Trials per dimension and sample size [default: 16]
    #[arg(long)]
    trials: Option<usize>,

    /// Seed of the random number generator [default: 12345]
    #[arg(long)]
    seed: Option<u64>,

    /// Output file for the error curves
    #[arg(long, default_value = "convergence.json")]
    out: PathBuf,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Starts from the configuration file, if any, and applies the command-line options on top.
fn build_config(args: &Args) -> Result<StudyConfig> {
    let mut config = match &args.config {
        Some(path) => StudyConfig::from_file(path)?,
        None => StudyConfig::default(),
    };

    if let Some(dims) = &args.dims {
        config.dims = parse_dims(dims)?;
    }
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(kmin) = args.kmin {
        config.kmin = kmin;
    }
    if let Some(kmax) = args.kmax {
        config.kmax = kmax;
    }
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    config.validate()?;

    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    info!(?config, "configuration loaded");

    let curves = study::run_seeded(&config, &SimpleCallback {})?;
    study::write_curves(&args.out, &curves)?;

    println!("Saved {}", args.out.display());

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
