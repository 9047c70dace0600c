//! The textual report of a single estimate.
use crate::core::EstimationResult;
use crate::reference::{ball_volume, relative_error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything reported for one estimate: the inputs, the estimate, and its relative error with
/// respect to the exact volume.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Report {
    radius: f64,
    dim: usize,
    calls: i64,
    volume: f64,
    std_error: f64,
    relative_error: f64,
}

impl Report {
    /// Creates the report of `result`, the estimate for the `dim`-dimensional ball with the given
    /// `radius` using `calls` samples. `calls` is the number of samples as requested, which may be
    /// zero or negative.
    pub fn new(dim: usize, calls: i64, radius: f64, result: &EstimationResult<f64>) -> Self {
        let truth = ball_volume(dim, radius);

        Self {
            radius,
            dim,
            calls,
            volume: result.volume(),
            std_error: result.std_error(),
            relative_error: relative_error(result.volume(), truth),
        }
    }

    /// Returns the relative error of the estimate.
    pub fn relative_error(&self) -> f64 {
        self.relative_error
    }
}

/// Formats `x` as its shortest round-trip representation, keeping a `.0` for integral values and
/// writing non-finite values as `nan`, `inf` and `-inf`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x == f64::INFINITY {
        "inf".to_string()
    } else if x == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:?}", x)
    }
}

impl fmt::Display for Report {
    /// Writes exactly five lines. Scripts parse this output, so neither the labels nor their order
    /// may change.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(r): {}", format_float(self.radius))?;
        writeln!(f, "(d,N): {} {}", self.dim, self.calls)?;
        writeln!(f, "volume: {}", format_float(self.volume))?;
        writeln!(f, "stat uncertainty: {}", format_float(self.std_error))?;
        writeln!(f, "relative error: {}", format_float(self.relative_error))
    }
}
