//! Hit-or-miss ("stone throwing") estimation of the volume of a ball.
//!
//! Points are thrown uniformly into the hypercube $[-r, r]^d$ of volume $C = (2r)^d$. If
//! $N_\mathrm{in}$ of $N$ points land inside the ball, the volume is estimated as
//!
//! $$ \hat{V} = \hat{p} C, \qquad \hat{p} = \frac{N_\mathrm{in}}{N} $$
//!
//! with the binomial standard error
//!
//! $$ \sigma = C \sqrt{\frac{\hat{p} (1 - \hat{p})}{N}} . $$
//!
//! The points are generated in chunks of at most [`CHUNK_SIZE`] points, so that the memory
//! needed is independent of $N$.
use crate::core::estimators::*;
use crate::core::*;

use num_traits::{Float, FromPrimitive};
use tracing::debug;

/// The maximum number of points materialized at once.
pub const CHUNK_SIZE: usize = 500_000;

/// Returns the number of points in the first batch used for `calls` throws with at most `chunk`
/// points per batch. The result lies in $[1, N]$ for $N > 0$.
pub fn effective_chunk_size(chunk: usize, calls: usize) -> usize {
    chunk.min(calls).max(1)
}

/// Counts the points, stored one after the other in `points`, whose squared norm is at most `r2`.
fn count_inside<T: Float>(points: &[T], dim: usize, r2: T) -> usize {
    points
        .chunks_exact(dim)
        .filter(|x| x.iter().fold(T::zero(), |sum, &x| sum + x * x) <= r2)
        .count()
}

/// Throws `calls` points uniformly into the hypercube around the `dim`-dimensional ball with the
/// given `radius`, drawing at most `chunk` points from `rng` at a time, and returns the
/// accumulated counts.
///
/// The source is advanced by exactly `calls * dim` uniform numbers, in the same order for every
/// value of `chunk`.
pub fn integrate_with_chunk_size<T, R>(
    dim: usize,
    calls: usize,
    radius: T,
    rng: &mut R,
    chunk: usize,
) -> BallEstimators<T>
where
    T: Float + FromPrimitive,
    R: RandomSource<T> + ?Sized,
{
    let two = T::one() + T::one();
    // `powi` takes an `i32`; dimensions beyond that underflow or overflow anyway
    let exponent = i32::try_from(dim).unwrap_or(i32::MAX);
    let hypercube = (two * radius).powi(exponent);
    let r2 = radius * radius;

    let mut estimators = BallEstimators::new(hypercube);

    if calls == 0 {
        return estimators;
    }

    let chunk = effective_chunk_size(chunk, calls);

    let lower = vec![-radius; dim];
    let upper = vec![radius; dim];
    // the buffer is reused for every batch, the last batch may only use a part of it
    let mut points = vec![T::zero(); chunk * dim];
    let mut remaining = calls;

    while remaining > 0 {
        let batch = chunk.min(remaining);
        let x = &mut points[..batch * dim];

        rng.fill_uniform(&lower, &upper, x);

        // the only point of the zero-dimensional ball is inside it
        let inside = if dim == 0 {
            batch
        } else {
            count_inside(x, dim, r2)
        };

        estimators.update(inside, batch);
        remaining -= batch;

        debug!(batch, inside, remaining, "finished chunk");
    }

    estimators
}

/// Same as [`integrate_with_chunk_size`] with chunks of [`CHUNK_SIZE`] points.
pub fn integrate<T, R>(dim: usize, calls: usize, radius: T, rng: &mut R) -> BallEstimators<T>
where
    T: Float + FromPrimitive,
    R: RandomSource<T> + ?Sized,
{
    integrate_with_chunk_size(dim, calls, radius, rng, CHUNK_SIZE)
}

/// Estimates the volume of the `dim`-dimensional ball with the given `radius` by throwing `calls`
/// points, drawn from `rng`, in chunks of at most `chunk` points.
///
/// For `calls == 0` the estimate is undefined and both numbers of the result are NaN.
pub fn estimate_with_chunk_size<T, R>(
    dim: usize,
    calls: usize,
    radius: T,
    rng: &mut R,
    chunk: usize,
) -> EstimationResult<T>
where
    T: Float + FromPrimitive,
    R: RandomSource<T> + ?Sized,
{
    if calls == 0 {
        return EstimationResult::undefined();
    }

    let estimators = integrate_with_chunk_size(dim, calls, radius, rng, chunk);
    let result = EstimationResult::new(estimators.mean(), estimators.std());

    debug!(
        dim,
        calls,
        inside = estimators.inside_calls(),
        "estimated ball volume"
    );

    result
}

/// Estimates the volume of the `dim`-dimensional ball with the given `radius` by throwing `calls`
/// points drawn from `rng`. See the [module documentation](self) for the estimator.
///
/// For `calls == 0` the estimate is undefined and both numbers of the result are NaN.
///
/// # Examples
///
/// ```
/// use mcball::integrators::hit_or_miss;
/// use rand_pcg::Pcg64;
///
/// let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
/// let result = hit_or_miss::estimate(2, 100_000, 1.0f64, &mut rng);
///
/// assert!((result.volume() - std::f64::consts::PI).abs() < 5.0 * result.std_error());
/// ```
pub fn estimate<T, R>(dim: usize, calls: usize, radius: T, rng: &mut R) -> EstimationResult<T>
where
    T: Float + FromPrimitive,
    R: RandomSource<T> + ?Sized,
{
    estimate_with_chunk_size(dim, calls, radius, rng, CHUNK_SIZE)
}
