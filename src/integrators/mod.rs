//! Monte Carlo integrators.
pub mod hit_or_miss;
