use mcball::estimators::*;
use mcball::integrators::hit_or_miss;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn volume_within_hypercube(
        dim in 1usize..8,
        calls in 1usize..2_000,
        radius in 0.0f64..10.0,
        seed in any::<u64>(),
    ) {
        let mut rng = Pcg64::seed_from_u64(seed);
        let result = hit_or_miss::estimate(dim, calls, radius, &mut rng);
        let hypercube = (2.0 * radius).powi(dim as i32);

        prop_assert!(result.volume() >= 0.0);
        prop_assert!(result.volume() <= hypercube);
        prop_assert!(result.std_error() >= 0.0);
    }

    #[test]
    fn no_uncertainty_without_misses_or_hits(
        dim in 1usize..6,
        calls in 1usize..200,
        radius in 0.0f64..3.0,
        seed in any::<u64>(),
    ) {
        let estimators = hit_or_miss::integrate(dim, calls, radius, &mut Pcg64::seed_from_u64(seed));
        let result = hit_or_miss::estimate(dim, calls, radius, &mut Pcg64::seed_from_u64(seed));

        prop_assert_eq!(estimators.calls(), calls);
        prop_assert_eq!(result.volume(), estimators.mean());
        prop_assert_eq!(result.std_error(), estimators.std());

        if estimators.inside_calls() == 0 || estimators.inside_calls() == calls {
            prop_assert_eq!(result.std_error(), 0.0);
        } else {
            // a hypercube that underflowed to zero has no uncertainty either
            prop_assert!(result.std_error() > 0.0 || estimators.hypercube() == 0.0);
        }
    }

    #[test]
    fn reproducible(
        dim in 1usize..6,
        calls in 0usize..1_000,
        seed in any::<u64>(),
    ) {
        let first = hit_or_miss::estimate(dim, calls, 1.0f64, &mut Pcg64::seed_from_u64(seed));
        let second = hit_or_miss::estimate(dim, calls, 1.0f64, &mut Pcg64::seed_from_u64(seed));

        if calls == 0 {
            prop_assert!(first.is_undefined() && second.is_undefined());
        } else {
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn chunking_is_invisible(
        dim in 1usize..5,
        calls in 1usize..5_000,
        chunk in 1usize..600,
        seed in any::<u64>(),
    ) {
        let chunked = hit_or_miss::integrate_with_chunk_size(
            dim, calls, 1.0f64, &mut Pcg64::seed_from_u64(seed), chunk,
        );
        let whole = hit_or_miss::integrate_with_chunk_size(
            dim, calls, 1.0f64, &mut Pcg64::seed_from_u64(seed), calls,
        );

        prop_assert_eq!(chunked.inside_calls(), whole.inside_calls());
        prop_assert_eq!(chunked.calls(), calls);
    }
}
