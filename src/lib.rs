#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `mcball` estimates the volume of the $d$-dimensional ball of radius $r$ with
//! [hit-or-miss Monte Carlo integration], also known as "throwing stones", and quantifies the
//! statistical uncertainty of the estimate.
//!
//! # Features
//!
//! - **Generic numeric type**. The estimators work with `f32`, `f64`, or any type implementing the
//! `Float` trait from the `num-traits` crate. A single estimate uses one precision throughout.
//! - **Injected random numbers**. The estimators never create a random number generator. Every
//! generator implementing the `Rng` trait from the `rand` crate is a [`RandomSource`], so the
//! caller controls seeding, and identically seeded generators give identical results.
//! - **Bounded memory**. Points are generated in chunks of at most
//! [`integrators::hit_or_miss::CHUNK_SIZE`] points, regardless of how many are requested. The
//! size of the chunks changes neither the sequence of random numbers nor the result.
//! - **Exact reference**. The closed-form volume, see [`reference::ball_volume`], allows
//! computing the relative error of every estimate.
//! - **Convergence studies**. The module [`study`] measures how the relative error decreases with
//! the number of samples.
//!
//! # What is ...?
//!
//! Given the ball $B_d(r) = \{ x \in \mathbb{R}^d : |x| \le r \}$ inside the hypercube
//! $[-r, r]^d$ with volume $C = (2r)^d$, we draw $N$ points uniformly from the hypercube and count
//! the $N_\mathrm{in}$ points inside the ball. We use the following terms:
//!
//! - the number of *calls* or the *sample size* is $N$,
//! - the *inside fraction* is $\hat{p} = N_\mathrm{in} / N$,
//! - the *volume estimate* is $\hat{p} C$,
//! - the *statistical uncertainty* is the standard error of the binomial proportion $\hat{p}$
//! times $C$, that is $C \sqrt{\hat{p}(1-\hat{p})/N}$,
//! - the *relative error* is $|\hat{V} - V| / V$, where $V$ is the exact volume.
//!
//! [hit-or-miss Monte Carlo integration]: https://en.wikipedia.org/wiki/Monte_Carlo_integration

pub mod callbacks;
pub mod core;
pub mod error;
pub mod integrators;
pub mod logging;
pub mod reference;
pub mod report;
pub mod study;

pub use crate::core::*;
pub use crate::error::{Error, Result};
