//! Random parameter sampling.
//!
//! A generated series is driven by four scalars drawn once per run from
//! uniform distributions, plus two per-day multiplier ranges used to derive
//! the lower and upper price bounds. The defaults are:
//!
//! | Quantity     | Range            |
//! |--------------|------------------|
//! | base price   | `[200, 500)`     |
//! | trend        | `[-0.05, 0.05)`  |
//! | seasonality  | `[0.1, 0.3)`     |
//! | noise level  | `[5, 20)`        |
//! | lower factor | `[0.8, 0.95)`    |
//! | upper factor | `[1.05, 1.2)`    |

use rand::Rng;

use crate::error::{Error, Result};

// ============================================================================
// Uniform Range
// ============================================================================

/// A half-open interval `[low, high)` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
}

impl UniformRange {
    /// Creates a new range. Use [`UniformRange::validate`] before sampling
    /// from user-supplied bounds.
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Checks that both bounds are finite and `low < high`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] naming the quantity otherwise.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        if self.low.is_finite() && self.high.is_finite() && self.low < self.high {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                name,
                low: self.low,
                high: self.high,
            })
        }
    }

    /// Returns true if `value` lies in `[low, high)`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..self.high).contains(&value)
    }

    /// Draws one value. The range must already be valid.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.low..self.high)
    }
}

// ============================================================================
// Price Parameters
// ============================================================================

/// The four scalars that shape a generated price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceParams {
    /// Price level at `t = 0` before seasonality and noise.
    pub base_price: f64,
    /// Fractional linear drift over the whole window (e.g. `0.03` = +3%).
    pub trend: f64,
    /// Fractional amplitude of the yearly sinusoid.
    pub seasonality: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_level: f64,
}

/// Sampling ranges for [`PriceParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRanges {
    /// Range for [`PriceParams::base_price`].
    pub base_price: UniformRange,
    /// Range for [`PriceParams::trend`].
    pub trend: UniformRange,
    /// Range for [`PriceParams::seasonality`].
    pub seasonality: UniformRange,
    /// Range for [`PriceParams::noise_level`].
    pub noise_level: UniformRange,
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            base_price: UniformRange::new(200.0, 500.0),
            trend: UniformRange::new(-0.05, 0.05),
            seasonality: UniformRange::new(0.1, 0.3),
            noise_level: UniformRange::new(5.0, 20.0),
        }
    }
}

impl ParamRanges {
    /// Validates every range.
    ///
    /// The noise range must also be non-negative since it feeds a standard
    /// deviation.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidRange`] or [`Error::InvalidParameter`]
    /// found, checked in field order.
    pub fn validate(&self) -> Result<()> {
        self.base_price.validate("base price")?;
        self.trend.validate("trend")?;
        self.seasonality.validate("seasonality")?;
        self.noise_level.validate("noise level")?;
        if self.noise_level.low < 0.0 {
            return Err(Error::InvalidParameter {
                name: "noise level",
                value: self.noise_level.low,
                reason: "standard deviation must be non-negative",
            });
        }
        Ok(())
    }

    /// Draws a [`PriceParams`] in field order: base price, trend,
    /// seasonality, noise level.
    ///
    /// # Errors
    ///
    /// Returns an error if the ranges fail [`ParamRanges::validate`]; nothing
    /// is drawn from `rng` in that case.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PriceParams> {
        self.validate()?;
        Ok(PriceParams {
            base_price: self.base_price.sample(rng),
            trend: self.trend.sample(rng),
            seasonality: self.seasonality.sample(rng),
            noise_level: self.noise_level.sample(rng),
        })
    }
}

// ============================================================================
// Bound Factors
// ============================================================================

/// Per-day multiplier ranges for the lower and upper price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundFactors {
    /// Multiplier range for the lower bound.
    pub lower: UniformRange,
    /// Multiplier range for the upper bound.
    pub upper: UniformRange,
}

impl Default for BoundFactors {
    fn default() -> Self {
        Self {
            lower: UniformRange::new(0.8, 0.95),
            upper: UniformRange::new(1.05, 1.2),
        }
    }
}

impl BoundFactors {
    /// Validates both ranges.
    ///
    /// Overlapping ranges are accepted: the ordering of the bounds around
    /// the modal price is never enforced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for the first invalid range.
    pub fn validate(&self) -> Result<()> {
        self.lower.validate("lower bound factor")?;
        self.upper.validate("upper bound factor")
    }
}
