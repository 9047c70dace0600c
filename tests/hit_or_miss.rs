use mcball::estimators::*;
use mcball::integrators::hit_or_miss;
use mcball::reference::{ball_volume, relative_error};

use assert_approx_eq::assert_approx_eq;
use rand::Rng;
use rand_pcg::Pcg64;
use serde::Serialize;
use std::f64::consts::PI;

fn assert_eq_rng<R>(lhs: &R, rhs: &R)
where
    R: Rng + Serialize,
{
    assert_eq!(
        serde_json::to_string(lhs).unwrap(),
        serde_json::to_string(rhs).unwrap()
    );
}

fn rng() -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

#[test]
fn segment_volume() {
    const CALLS: usize = 1_000_000;

    let mut rng = rng();
    let result = hit_or_miss::estimate(1, CALLS, 1.0f64, &mut rng);

    // the segment [-1, 1] fills its bounding box, so every point is a hit
    assert!((result.volume() - 2.0).abs() <= 3.0 * result.std_error());
    assert!(result.std_error() >= 0.0);
    assert!(result.std_error() < 0.01);
    assert_eq!(result.volume(), 2.0);
}

#[test]
fn disk_volume() {
    const CALLS: usize = 100_000;

    let mut rng = rng();
    let result = hit_or_miss::estimate(2, CALLS, 1.0f64, &mut rng);

    assert_approx_eq!(result.volume(), PI, 0.05);
    assert!(result.std_error() > 0.0);
    assert!(result.std_error() < 0.01);
    // 4 * sqrt(p (1 - p) / N) with p close to pi / 4
    assert_approx_eq!(
        result.std_error(),
        4.0 * (PI / 4.0 * (1.0 - PI / 4.0) / CALLS as f64).sqrt(),
        1e-4
    );
}

#[test]
fn ball_volume_in_five_dimensions() {
    let mut rng = rng();
    let result = hit_or_miss::estimate(5, 200_000, 2.0f64, &mut rng);
    let truth = ball_volume(5, 2.0f64);

    assert!((result.volume() - truth).abs() < 5.0 * result.std_error());
    assert!(relative_error(result.volume(), truth) < 0.05);
}

#[test]
fn rng_advances_by_all_coordinates() {
    const DIM: usize = 3;
    const CALLS: usize = 1_234;

    let mut rng = rng();
    let mut reference = rng.clone();

    let estimators = hit_or_miss::integrate_with_chunk_size(DIM, CALLS, 1.0f64, &mut rng, 100);

    for _ in 0..DIM * CALLS {
        let _: f64 = reference.gen();
    }

    assert_eq!(estimators.calls(), CALLS);
    assert_eq_rng(&rng, &reference);
}

#[test]
fn chunk_size_does_not_change_counts() {
    const CALLS: usize = 100_000;

    let mut rng_whole = rng();
    let mut rng_tenths = rng();
    let mut rng_odd = rng();

    let whole = hit_or_miss::integrate_with_chunk_size(4, CALLS, 1.0f64, &mut rng_whole, CALLS);
    let tenths =
        hit_or_miss::integrate_with_chunk_size(4, CALLS, 1.0f64, &mut rng_tenths, CALLS / 10);
    let odd = hit_or_miss::integrate_with_chunk_size(4, CALLS, 1.0f64, &mut rng_odd, 997);

    assert_eq!(whole.inside_calls(), tenths.inside_calls());
    assert_eq!(whole.inside_calls(), odd.inside_calls());
    assert_eq!(whole, tenths);
    assert_eq_rng(&rng_whole, &rng_tenths);
    assert_eq_rng(&rng_whole, &rng_odd);
}

#[test]
fn identical_seeds_give_identical_results() {
    let first = hit_or_miss::estimate(6, 50_000, 0.5f64, &mut rng());
    let second = hit_or_miss::estimate(6, 50_000, 0.5f64, &mut rng());

    assert_eq!(first, second);
}

#[test]
fn zero_calls_leave_rng_untouched() {
    let mut rng = rng();
    let result = hit_or_miss::estimate(3, 0, 1.0f64, &mut rng);

    assert!(result.is_undefined());
    assert_eq_rng(&rng, &self::rng());
}

#[test]
fn zero_radius() {
    for dim in 1..8 {
        let result = hit_or_miss::estimate(dim, 100, 0.0f64, &mut rng());

        assert_eq!(result.volume(), 0.0);
        assert_eq!(result.std_error(), 0.0);
    }
}

#[test]
fn combined_runs() {
    let mut rng = rng();
    let first = hit_or_miss::integrate(3, 10_000, 1.0f64, &mut rng);
    let second = hit_or_miss::integrate(3, 10_000, 1.0f64, &mut rng);
    let both = hit_or_miss::integrate(3, 20_000, 1.0f64, &mut self::rng());

    assert_eq!(first + second, both);
}
