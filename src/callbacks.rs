//! Implementation of different callback functions.
use crate::study::ConvergencePoint;
use tracing::info;

/// Trait for implementing callbacks for the convergence study.
pub trait Callback {
    /// This method is called after all trials for the sample size of `point` in dimension `dim`
    /// have finished and may print information about it.
    fn print(&self, dim: usize, point: &ConvergencePoint);
}

/// A callback function that does nothing
pub struct SinkCallback {}

impl Callback for SinkCallback {
    fn print(&self, _: usize, _: &ConvergencePoint) {}
}

/// A callback function that logs the result of each sample size
pub struct SimpleCallback {}

impl Callback for SimpleCallback {
    fn print(&self, dim: usize, point: &ConvergencePoint) {
        info!(
            "d={} N={} error={} \u{b1} {}",
            dim,
            point.calls(),
            point.mean_error(),
            point.sem_error()
        );
    }
}
