//! Estimates the volume of a single d-ball and prints the five-line report.

use clap::error::ErrorKind;
use clap::Parser;
use mcball::integrators::hit_or_miss;
use mcball::logging::init_tracing;
use mcball::report::Report;
use mcball::{Error, Result};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::process::ExitCode;
use tracing::{debug, info};

/// Environment variable that fixes the seed of the random number generator.
const SEED_VAR: &str = "MCBALL_SEED";

/// Estimate the volume of the d-dimensional ball by throwing stones
#[derive(Parser, Debug)]
#[command(name = "ball_volume")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Dimension of the ball
    dim: usize,

    /// Number of samples, zero or less gives an undefined (nan) estimate
    calls: i64,

    /// Radius of the ball
    radius: f64,
}

impl Args {
    fn validate(self) -> Result<Self> {
        if self.dim == 0 {
            return Err(Error::InvalidArgument {
                name: "dim",
                reason: "the dimension must be at least one".to_string(),
            });
        }

        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(Error::InvalidArgument {
                name: "radius",
                reason: format!("expected a finite, non-negative number, got {}", self.radius),
            });
        }

        Ok(self)
    }
}

fn parse_args() -> Result<Args> {
    let args = Args::try_parse().map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => Error::Usage(err.to_string()),
    })?;

    args.validate()
}

fn rng_from_env() -> Result<Pcg64> {
    match std::env::var(SEED_VAR) {
        Ok(seed) => {
            let seed = seed.trim().parse().map_err(|_| Error::InvalidArgument {
                name: SEED_VAR,
                reason: format!("`{}` is not an unsigned integer", seed),
            })?;
            debug!(seed, "seeding from environment");
            Ok(Pcg64::seed_from_u64(seed))
        }
        Err(_) => Ok(Pcg64::from_entropy()),
    }
}

fn run() -> Result<Report> {
    let args = parse_args()?;
    let mut rng = rng_from_env()?;

    // a non-positive number of samples gives the undefined estimate
    let calls = usize::try_from(args.calls).unwrap_or(0);

    info!(dim = args.dim, calls, radius = args.radius, "estimating");
    let result = hit_or_miss::estimate(args.dim, calls, args.radius, &mut rng);

    Ok(Report::new(args.dim, args.calls, args.radius, &result))
}

fn main() -> ExitCode {
    init_tracing("warn");

    match run() {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
