//! Closed-form volumes to compare estimates against.
use num_traits::{Float, FromPrimitive};
use statrs::function::gamma::ln_gamma;

/// Returns the exact volume of the `dim`-dimensional ball with the given `radius`,
///
/// $$ V_d(r) = \frac{\pi^{d/2}}{\Gamma(d/2 + 1)} r^d . $$
///
/// The dimension must be at least one; for `dim == 0` the formula gives one.
pub fn ball_volume<T>(dim: usize, radius: T) -> T
where
    T: Float + FromPrimitive,
{
    let half_dim = dim as f64 / 2.0;
    // the gamma function overflows long before the volume of the unit ball underflows
    let unit_ball = (half_dim * std::f64::consts::PI.ln() - ln_gamma(half_dim + 1.0)).exp();
    let exponent = i32::try_from(dim).unwrap_or(i32::MAX);

    T::from_f64(unit_ball).unwrap_or_else(T::nan) * radius.powi(exponent)
}

/// Returns the relative error $|\hat{V} - V| / V$ of `estimate` with respect to `truth`, which is
/// NaN if `truth` is zero.
pub fn relative_error<T: Float>(estimate: T, truth: T) -> T {
    if truth == T::zero() {
        T::nan()
    } else {
        (estimate - truth).abs() / truth
    }
}
