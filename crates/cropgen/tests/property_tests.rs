//! Property-based tests using proptest.
//!
//! These tests check invariants that must hold for any valid configuration:
//! index selection shape, date ordering, finiteness and seed determinism.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use cropgen::dates::{evenly_spaced_indices, full_date_range, sample_dates};
use cropgen::generator::{generate, GeneratorConfig};
use cropgen::params::{BoundFactors, PriceParams};
use cropgen::series::{apply_bounds, deterministic_price, price_series};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ==================== Strategies ====================

/// A calendar window of 1 to ~20 years starting between 1990 and 2030.
fn arb_window() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..14_600, 0u64..7_300).prop_map(|(offset, span)| {
        let base = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let start = base + Days::new(offset);
        (start, start + Days::new(span))
    })
}

fn arb_params() -> impl Strategy<Value = PriceParams> {
    (200.0..500.0_f64, -0.05..0.05_f64, 0.1..0.3_f64, 5.0..20.0_f64).prop_map(
        |(base_price, trend, seasonality, noise_level)| PriceParams {
            base_price,
            trend,
            seasonality,
            noise_level,
        },
    )
}

// ==================== Index Selection ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Output length equals the requested count
    #[test]
    fn prop_indices_length(len in 1usize..5000, count in 0usize..2000) {
        prop_assert_eq!(evenly_spaced_indices(len, count).len(), count);
    }

    /// First index is 0 and last is len - 1 whenever two or more are requested
    #[test]
    fn prop_indices_endpoints(len in 1usize..5000, count in 2usize..2000) {
        let indices = evenly_spaced_indices(len, count);
        prop_assert_eq!(indices[0], 0);
        prop_assert_eq!(indices[count - 1], len - 1);
    }

    /// Indices never decrease and stay in range
    #[test]
    fn prop_indices_sorted_in_range(len in 1usize..5000, count in 0usize..2000) {
        let indices = evenly_spaced_indices(len, count);
        for pair in indices.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert!(indices.iter().all(|&i| i < len));
    }

    /// No duplicates unless more indices are requested than exist
    #[test]
    fn prop_indices_unique_when_count_fits(len in 1usize..5000, count in 0usize..2000) {
        prop_assume!(count <= len);
        let indices = evenly_spaced_indices(len, count);
        for pair in indices.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Each index is within half a step of its exact linear position
    #[test]
    fn prop_indices_close_to_linear(len in 2usize..5000, count in 2usize..2000) {
        let indices = evenly_spaced_indices(len, count);
        let step = (len - 1) as f64 / (count - 1) as f64;
        for (i, &index) in indices.iter().enumerate() {
            prop_assert!((index as f64 - i as f64 * step).abs() <= 0.5 + 1e-9);
        }
    }
}

// ==================== Date Sampling ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Sampled dates agree with indexing the materialized window
    #[test]
    fn prop_sample_dates_matches_window((start, end) in arb_window(), count in 0usize..400) {
        let window = full_date_range(start, end).unwrap();
        let expected: Vec<NaiveDate> = evenly_spaced_indices(window.len(), count)
            .into_iter()
            .map(|i| window[i])
            .collect();
        prop_assert_eq!(sample_dates(start, end, count).unwrap(), expected);
    }
}

// ==================== Series ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Noisy prices are finite for every default-range parameter set
    #[test]
    fn prop_prices_finite(params in arb_params(), days in 0usize..1000, seed in any::<u64>()) {
        let prices = price_series(&params, days, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(prices.len(), days);
        prop_assert!(prices.iter().all(|p| p.is_finite()));
    }

    /// The noise-free curve stays within the trend and seasonality envelope
    #[test]
    fn prop_curve_envelope(params in arb_params(), days in 1usize..1000, t in 0usize..1000) {
        prop_assume!(t < days);
        let price = deterministic_price(&params, t, days);
        let trend = 1.0 + params.trend * t as f64 / days as f64;
        let low = params.base_price * trend * (1.0 - params.seasonality);
        let high = params.base_price * trend * (1.0 + params.seasonality);
        prop_assert!(price >= low - 1e-9 && price <= high + 1e-9);
    }

    /// Bound factors stay inside their ranges
    #[test]
    fn prop_bound_factor_ranges(prices in prop::collection::vec(1.0..1000.0_f64, 0..200), seed in any::<u64>()) {
        let factors = BoundFactors::default();
        let (lower, upper) = apply_bounds(&prices, &factors, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        for ((price, l), u) in prices.iter().zip(&lower).zip(&upper) {
            let lf = l / price;
            let uf = u / price;
            prop_assert!((factors.lower.low - 1e-12..factors.lower.high + 1e-12).contains(&lf));
            prop_assert!((factors.upper.low - 1e-12..factors.upper.high + 1e-12).contains(&uf));
        }
    }
}

// ==================== Generator ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same seed, same dataset; row count and ordering hold for any window
    #[test]
    fn prop_generate_deterministic_and_sorted(
        (start, end) in arb_window(),
        rows in 0usize..500,
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig { rows, start, end, seed: Some(seed), ..GeneratorConfig::default() };
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), rows);
        for pair in a.records.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
        if rows >= 2 {
            prop_assert_eq!(a.records[0].date, start);
            prop_assert_eq!(a.records[rows - 1].date, end);
        }
    }
}
