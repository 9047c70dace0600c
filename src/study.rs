//! Convergence study of the hit-or-miss estimator.
//!
//! For every dimension and every sample size $N = 2^k$ the volume is estimated in a number of
//! independent trials. The mean absolute relative error over the trials together with its standard
//! error (the sample standard deviation divided by the square root of the number of trials) should
//! shrink like $1/\sqrt{N}$.
use crate::callbacks::Callback;
use crate::error::{Error, Result};
use crate::integrators::hit_or_miss;
use crate::reference::{ball_volume, relative_error};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Seeds of the child generators are drawn from $[0, 2^{63} - 1)$.
const SEED_BOUND: u64 = (1 << 63) - 1;

/// Parameters of a convergence study.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct StudyConfig {
    /// The dimensions of the balls.
    pub dims: Vec<usize>,
    /// The radius of the balls.
    pub radius: f64,
    /// The smallest sample size is $2^{k_\mathrm{min}}$.
    pub kmin: u32,
    /// The largest sample size is $2^{k_\mathrm{max}}$.
    pub kmax: u32,
    /// The number of independent estimates per dimension and sample size.
    pub trials: usize,
    /// The seed of the generator all child generators are seeded from.
    pub seed: u64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            dims: vec![3, 5, 10],
            radius: 1.0,
            kmin: 1,
            kmax: 16,
            trials: 16,
            seed: 12345,
        }
    }
}

impl StudyConfig {
    /// Reads a configuration from the JSON file at `path`. Missing fields take their default
    /// values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);

        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks that the study can be run with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dims.is_empty() {
            return Err(Error::Config("no dimensions given".to_string()));
        }

        if self.dims.contains(&0) {
            return Err(Error::Config("dimensions must be positive".to_string()));
        }

        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::Config(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }

        if self.kmin > self.kmax {
            return Err(Error::Config(format!(
                "`kmin` ({}) exceeds `kmax` ({})",
                self.kmin, self.kmax
            )));
        }

        if self.kmax >= usize::BITS - 1 {
            return Err(Error::Config(format!(
                "`kmax` must be smaller than {}, got {}",
                usize::BITS - 1,
                self.kmax
            )));
        }

        if self.trials == 0 {
            return Err(Error::Config("at least one trial is needed".to_string()));
        }

        Ok(())
    }

    /// Returns the sample sizes $2^k$ for $k_\mathrm{min} \le k \le k_\mathrm{max}$.
    pub fn sample_sizes(&self) -> Vec<usize> {
        (self.kmin..=self.kmax).map(|k| 1 << k).collect()
    }
}

/// Parses a comma-separated list of dimensions like `3,5,10`. Empty entries are skipped.
pub fn parse_dims(list: &str) -> Result<Vec<usize>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| Error::Config(format!("`{}` is not a dimension", s)))
        })
        .collect()
}

/// The relative errors of all trials for a single sample size.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConvergencePoint {
    calls: usize,
    inv_sqrt_calls: f64,
    mean_error: f64,
    sem_error: f64,
}

impl ConvergencePoint {
    /// Summarizes the relative `errors` of all trials with `calls` samples each.
    pub fn new(calls: usize, errors: &[f64]) -> Self {
        let (mean_error, sem_error) = mean_and_sem(errors);

        Self {
            calls,
            inv_sqrt_calls: 1.0 / (calls as f64).sqrt(),
            mean_error,
            sem_error,
        }
    }

    /// Returns the sample size $N$.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Returns $1/\sqrt{N}$.
    pub fn inv_sqrt_calls(&self) -> f64 {
        self.inv_sqrt_calls
    }

    /// Returns the mean absolute relative error over all trials.
    pub fn mean_error(&self) -> f64 {
        self.mean_error
    }

    /// Returns the standard error of [`Self::mean_error`], which is NaN for a single trial.
    pub fn sem_error(&self) -> f64 {
        self.sem_error
    }
}

/// The mean of `values` and its standard error, using the unbiased sample variance.
fn mean_and_sem(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);

    (mean, (var / n).sqrt())
}

/// The convergence curve of a single dimension.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConvergenceCurve {
    dim: usize,
    radius: f64,
    trials: usize,
    points: Vec<ConvergencePoint>,
}

impl ConvergenceCurve {
    /// Returns the dimension of the ball.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the radius of the ball.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the number of trials per sample size.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns one point per sample size, in increasing order of the sample size.
    pub fn points(&self) -> &[ConvergencePoint] {
        &self.points
    }
}

/// Computes the convergence curve of the `dim`-dimensional ball with the given `radius` for the
/// sample sizes `sizes`. Every one of the `trials` estimates uses its own generator, seeded from
/// `rng`.
pub fn dimension_errors<R: Rng>(
    dim: usize,
    radius: f64,
    sizes: &[usize],
    trials: usize,
    rng: &mut R,
    callback: &impl Callback,
) -> ConvergenceCurve {
    let truth = ball_volume(dim, radius);
    let mut points = Vec::with_capacity(sizes.len());

    for &calls in sizes {
        let errors = (0..trials)
            .map(|trial| {
                let seed = rng.gen_range(0, SEED_BOUND);
                let mut child = Pcg64::seed_from_u64(seed);
                let result = hit_or_miss::estimate(dim, calls, radius, &mut child);

                debug!(dim, calls, trial, seed, volume = result.volume(), "finished trial");

                relative_error(result.volume(), truth).abs()
            })
            .collect::<Vec<_>>();

        let point = ConvergencePoint::new(calls, &errors);
        callback.print(dim, &point);
        points.push(point);
    }

    ConvergenceCurve {
        dim,
        radius,
        trials,
        points,
    }
}

/// Runs the study described by `config`, seeding all trials from `rng`. The dimensions are
/// processed in the order given.
pub fn run<R: Rng>(
    config: &StudyConfig,
    rng: &mut R,
    callback: &impl Callback,
) -> Result<Vec<ConvergenceCurve>> {
    config.validate()?;

    let sizes = config.sample_sizes();

    Ok(config
        .dims
        .iter()
        .map(|&dim| {
            info!(dim, levels = sizes.len(), trials = config.trials, "starting dimension");
            dimension_errors(dim, config.radius, &sizes, config.trials, rng, callback)
        })
        .collect())
}

/// Runs the study described by `config` with a generator seeded from `config.seed`.
pub fn run_seeded(config: &StudyConfig, callback: &impl Callback) -> Result<Vec<ConvergenceCurve>> {
    let mut rng = Pcg64::seed_from_u64(config.seed);

    run(config, &mut rng, callback)
}

/// Writes `curves` as JSON to the file at `path`, for plotting them elsewhere.
pub fn write_curves(path: &Path, curves: &[ConvergenceCurve]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, curves)?;
    writer.flush()?;

    Ok(())
}
