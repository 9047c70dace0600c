//! This module contains everything related to estimators.
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Basic estimators, like the mean, variance, and the standard deviation.
pub trait BasicEstimators<T: Float> {
    /// Returns the mean value.
    fn mean(&self) -> T;

    /// Returns the variance, $V$, of the mean.
    fn var(&self) -> T;

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    fn std(&self) -> T {
        self.var().sqrt()
    }
}

/// Estimators of a hit-or-miss run.
pub trait Estimators<T: Float>: BasicEstimators<T> {
    /// Returns the number of points, $N$, thrown into the hypercube.
    fn calls(&self) -> usize;

    /// Returns the number of points, $N_\mathrm{in}$, that landed inside the ball.
    fn inside_calls(&self) -> usize;

    /// Returns the fraction $\hat{p} = N_\mathrm{in} / N$ of points inside the ball.
    fn inside_fraction(&self) -> T;
}

/// Accumulator of a hit-or-miss run: how many points were thrown into the hypercube of volume
/// `hypercube` and how many of them landed inside the ball.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BallEstimators<T> {
    inside: usize,
    calls: usize,
    hypercube: T,
}

impl<T: Float> BallEstimators<T> {
    /// Creates an empty accumulator for a hypercube of volume `hypercube`.
    pub fn new(hypercube: T) -> Self {
        Self {
            inside: 0,
            calls: 0,
            hypercube,
        }
    }

    /// Creates an accumulator with `inside` hits out of `calls` throws.
    pub fn with_counts(hypercube: T, inside: usize, calls: usize) -> Self {
        debug_assert!(inside <= calls);
        Self {
            inside,
            calls,
            hypercube,
        }
    }

    /// Records a batch of `calls` throws of which `inside` were hits.
    pub fn update(&mut self, inside: usize, calls: usize) {
        debug_assert!(inside <= calls);
        self.inside += inside;
        self.calls += calls;
    }

    /// Returns the volume of the hypercube the points were drawn from.
    pub fn hypercube(&self) -> T {
        self.hypercube
    }
}

impl<T> BallEstimators<T>
where
    T: Float + FromPrimitive,
{
    /// Returns $\max(\hat{p}(1-\hat{p}), 0) / N$, the variance of $\hat{p}$.
    fn fraction_var(&self) -> T {
        let p = self.inside_fraction();
        let calls = T::from_usize(self.calls).unwrap_or_else(T::nan);
        // rounding may push p(1-p) slightly below zero for p close to 0 or 1
        let binomial = (p * (T::one() - p)).max(T::zero());

        binomial / calls
    }
}

impl<T: Float> Add for BallEstimators<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        debug_assert!(self.hypercube == other.hypercube);
        Self {
            inside: self.inside + other.inside,
            calls: self.calls + other.calls,
            hypercube: self.hypercube,
        }
    }
}

impl<T> BasicEstimators<T> for BallEstimators<T>
where
    T: Float + FromPrimitive,
{
    /// The volume estimate $\hat{p} C$, or NaN if no point was thrown.
    fn mean(&self) -> T {
        self.inside_fraction() * self.hypercube
    }

    /// The binomial variance of $\hat{p}$ propagated through $\hat{p} \mapsto \hat{p} C$, that is
    /// $C^2 \max(\hat{p}(1-\hat{p}), 0) / N$.
    fn var(&self) -> T {
        self.hypercube * self.hypercube * self.fraction_var()
    }

    /// $C \sqrt{\max(\hat{p}(1-\hat{p}), 0) / N}$, which stays finite when $C^2$ overflows.
    fn std(&self) -> T {
        self.hypercube * self.fraction_var().sqrt()
    }
}

impl<T> Estimators<T> for BallEstimators<T>
where
    T: Float + FromPrimitive,
{
    fn calls(&self) -> usize {
        self.calls
    }

    fn inside_calls(&self) -> usize {
        self.inside
    }

    fn inside_fraction(&self) -> T {
        if self.calls == 0 {
            return T::nan();
        }

        let inside = T::from_usize(self.inside).unwrap_or_else(T::nan);
        let calls = T::from_usize(self.calls).unwrap_or_else(T::nan);

        inside / calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_estimators() {
        // 3 hits out of 4 in the square [-1, 1]^2
        let estimators = BallEstimators::<f64>::with_counts(4.0, 3, 4);

        assert_eq!(estimators.calls(), 4);
        assert_eq!(estimators.inside_calls(), 3);
        assert_eq!(estimators.inside_fraction(), 0.75);
        assert_eq!(estimators.mean(), 3.0);
        // 4 * sqrt(0.75 * 0.25 / 4)
        assert_eq!(estimators.std(), 4.0 * (0.1875f64 / 4.0).sqrt());
        assert_eq!(estimators.var(), 16.0 * 0.1875 / 4.0);
    }

    #[test]
    fn test_ball_estimators_boundary_fractions() {
        let all = BallEstimators::<f64>::with_counts(8.0, 10, 10);
        assert_eq!(all.mean(), 8.0);
        assert_eq!(all.std(), 0.0);

        let none = BallEstimators::<f64>::with_counts(8.0, 0, 10);
        assert_eq!(none.mean(), 0.0);
        assert_eq!(none.std(), 0.0);
    }

    #[test]
    fn test_ball_estimators_empty() {
        let empty = BallEstimators::<f64>::new(2.0);

        assert!(empty.inside_fraction().is_nan());
        assert!(empty.mean().is_nan());
        assert!(empty.std().is_nan());
    }

    #[test]
    fn test_ball_estimators_huge_hypercube() {
        // C^2 overflows, C sqrt(p (1 - p) / N) does not
        let estimators = BallEstimators::<f64>::with_counts(1e200, 1, 4);

        assert!(estimators.var().is_infinite());
        assert_eq!(estimators.std(), 1e200 * (0.1875f64 / 4.0).sqrt());
        assert!(estimators.std().is_finite());
    }

    #[test]
    fn test_ball_estimators_add() {
        let mut first = BallEstimators::<f32>::new(2.0);
        first.update(3, 5);
        let mut second = BallEstimators::<f32>::new(2.0);
        second.update(1, 5);

        let sum = first + second;
        assert_eq!(sum.calls(), 10);
        assert_eq!(sum.inside_calls(), 4);
        assert_eq!(sum.hypercube(), 2.0);
        assert_eq!(sum.mean(), 0.8);
    }
}
