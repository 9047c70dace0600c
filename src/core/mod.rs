//! The core module
pub mod estimators;

use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A source of points drawn uniformly from an axis-aligned box.
///
/// The estimators never construct a source themselves, the caller owns it and thereby controls
/// seeding and reproducibility. Every random number generator implementing `Rng` is a
/// `RandomSource`.
pub trait RandomSource<T> {
    /// Fills `points` with `points.len() / lower.len()` points, stored one after the other, each
    /// drawn uniformly from the box $[l_1, u_1) \times \ldots \times [l_d, u_d)$ given by `lower`
    /// and `upper`.
    fn fill_uniform(&mut self, lower: &[T], upper: &[T], points: &mut [T]);
}

impl<T, R> RandomSource<T> for R
where
    T: Float,
    R: Rng,
    Standard: Distribution<T>,
{
    fn fill_uniform(&mut self, lower: &[T], upper: &[T], points: &mut [T]) {
        debug_assert_eq!(lower.len(), upper.len());

        if lower.is_empty() {
            return;
        }

        debug_assert_eq!(points.len() % lower.len(), 0);

        for point in points.chunks_exact_mut(lower.len()) {
            for ((x, &left), &right) in point.iter_mut().zip(lower).zip(upper) {
                let u: T = self.gen();
                *x = left + (right - left) * u;
            }
        }
    }
}

/// The result of an estimation: the volume and its statistical uncertainty.
///
/// Both numbers are NaN if the estimate is undefined, i.e. when no sample was drawn.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct EstimationResult<T> {
    volume: T,
    std_error: T,
}

impl<T: Float> EstimationResult<T> {
    /// Constructor.
    pub const fn new(volume: T, std_error: T) -> Self {
        Self { volume, std_error }
    }

    /// The result of an estimation without samples.
    pub fn undefined() -> Self {
        Self::new(T::nan(), T::nan())
    }

    /// Returns the volume estimate.
    pub fn volume(&self) -> T {
        self.volume
    }

    /// Returns the standard error of the volume estimate.
    pub fn std_error(&self) -> T {
        self.std_error
    }

    /// Returns `true` if both the volume and its uncertainty are NaN.
    pub fn is_undefined(&self) -> bool {
        self.volume.is_nan() && self.std_error.is_nan()
    }
}
