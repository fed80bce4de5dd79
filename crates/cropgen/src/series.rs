//! Price curve and bound series.
//!
//! The modal price for day `t` of an `n`-day series is
//!
//! ```text
//! price[t] = base * (1 + trend * t / n) * (1 + seasonality * sin(2π t / 365)) + noise[t]
//! ```
//!
//! where `noise[t] ~ Normal(0, noise_level)` is drawn independently per day.
//! `t` counts rows, not calendar days, so the yearly sinusoid completes one
//! cycle every 365 rows regardless of how far apart the sampled dates are.
//!
//! Bounds multiply each price by an independent uniform factor. Nothing ties
//! the two draws together, so `lower <= price <= upper` is likely but not
//! guaranteed (a negative price, for instance, inverts the ordering).

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};
use crate::params::{BoundFactors, PriceParams};

/// Days per seasonal cycle.
pub const SEASON_LENGTH: f64 = 365.0;

/// Evaluates the noise-free price curve for day `t` of a `days`-long series.
#[must_use]
pub fn deterministic_price(params: &PriceParams, t: usize, days: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let (t, days) = (t as f64, days as f64);
    let trend = 1.0 + params.trend * t / days;
    let season = 1.0 + params.seasonality * (2.0 * PI * t / SEASON_LENGTH).sin();
    params.base_price * trend * season
}

/// Generates `days` modal prices: the deterministic curve plus Gaussian noise.
///
/// Noise values are drawn from `rng` in day order.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `params.noise_level` is negative or
/// not finite.
///
/// # Example
///
/// ```
/// use cropgen::params::PriceParams;
/// use cropgen::series::price_series;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let params = PriceParams { base_price: 300.0, trend: 0.0, seasonality: 0.0, noise_level: 0.0 };
/// let prices = price_series(&params, 4, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
/// assert_eq!(prices, vec![300.0; 4]);
/// ```
pub fn price_series<R: Rng + ?Sized>(
    params: &PriceParams,
    days: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let invalid = || Error::InvalidParameter {
        name: "noise level",
        value: params.noise_level,
        reason: "standard deviation must be finite and non-negative",
    };
    if !(params.noise_level.is_finite() && params.noise_level >= 0.0) {
        return Err(invalid());
    }
    let noise = Normal::new(0.0, params.noise_level).map_err(|_| invalid())?;

    Ok((0..days)
        .map(|t| deterministic_price(params, t, days) + noise.sample(rng))
        .collect())
}

/// Derives lower and upper bound series from `prices`.
///
/// All lower factors are drawn before any upper factor, one per price.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if either factor range is invalid.
pub fn apply_bounds<R: Rng + ?Sized>(
    prices: &[f64],
    factors: &BoundFactors,
    rng: &mut R,
) -> Result<(Vec<f64>, Vec<f64>)> {
    factors.validate()?;

    let lower = prices
        .iter()
        .map(|price| price * factors.lower.sample(rng))
        .collect();
    let upper = prices
        .iter()
        .map(|price| price * factors.upper.sample(rng))
        .collect();

    Ok((lower, upper))
}
