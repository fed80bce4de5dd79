//! End-to-end dataset generation.
//!
//! [`generate`] runs the whole pipeline from a [`GeneratorConfig`]:
//!
//! 1. Sample [`PriceParams`] from the configured ranges
//! 2. Select evenly spaced dates from the calendar window
//! 3. Evaluate the noisy price curve, one value per row
//! 4. Derive the lower and upper bound series
//! 5. Zip into [`PriceRecord`]s and sort by date, then crop
//!
//! All randomness comes from a single `ChaCha8Rng`, consumed in that order,
//! so a fixed seed reproduces the dataset exactly.
//!
//! # Example
//!
//! ```
//! use cropgen::generator::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig { seed: Some(42), ..GeneratorConfig::default() };
//! let a = generate(&config).unwrap();
//! let b = generate(&config).unwrap();
//!
//! assert_eq!(a.records.len(), 351);
//! assert_eq!(a.records, b.records);
//! ```

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::dates::sample_dates;
use crate::error::{Error, Result};
use crate::params::{BoundFactors, ParamRanges, PriceParams};
use crate::record::{build_records, sort_records, PriceRecord};
use crate::series::{apply_bounds, price_series};
use crate::summary::DatasetSummary;

/// Number of rows in the default dataset.
pub const DEFAULT_ROWS: usize = 351;

/// Crop label of the default dataset.
pub const DEFAULT_CROP: &str = "Soya";

/// Inputs to [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of records to produce.
    pub rows: usize,
    /// First day of the calendar window (inclusive).
    pub start: NaiveDate,
    /// Last day of the calendar window (inclusive).
    pub end: NaiveDate,
    /// Label written on every record.
    pub crop: String,
    /// Sampling ranges for the series parameters.
    pub ranges: ParamRanges,
    /// Multiplier ranges for the price bounds.
    pub bounds: BoundFactors,
    /// RNG seed. A random seed is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            start: NaiveDate::from_ymd_opt(2010, 4, 6).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2017, 5, 12).expect("valid calendar date"),
            crop: DEFAULT_CROP.to_string(),
            ranges: ParamRanges::default(),
            bounds: BoundFactors::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Checks the calendar window and every sampling range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`], [`Error::InvalidRange`] or
    /// [`Error::InvalidParameter`].
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(Error::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        self.ranges.validate()?;
        self.bounds.validate()
    }
}

/// A generated dataset together with what produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Records sorted by date, then crop.
    pub records: Vec<PriceRecord>,
    /// The sampled series parameters.
    pub params: PriceParams,
    /// The seed the RNG was initialized with.
    pub seed: u64,
}

impl Dataset {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shape, date span and crop count of the records.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_records(&self.records)
    }
}

/// Generates a dataset from `config`, seeding a `ChaCha8Rng` from
/// `config.seed` or from the thread RNG.
///
/// # Errors
///
/// Returns an error if the configuration is invalid; see
/// [`GeneratorConfig::validate`].
pub fn generate(config: &GeneratorConfig) -> Result<Dataset> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (records, params) = generate_with_rng(config, &mut rng)?;
    Ok(Dataset {
        records,
        params,
        seed,
    })
}

/// Runs the pipeline with a caller-supplied RNG. `config.seed` is ignored.
///
/// # Errors
///
/// Returns an error if the configuration is invalid; nothing is drawn from
/// `rng` in that case.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(Vec<PriceRecord>, PriceParams)> {
    config.validate()?;

    let params = config.ranges.sample(rng)?;
    debug!(
        base_price = params.base_price,
        trend = params.trend,
        seasonality = params.seasonality,
        noise_level = params.noise_level,
        "sampled price parameters"
    );

    let dates = sample_dates(config.start, config.end, config.rows)?;
    let prices = price_series(&params, config.rows, rng)?;
    let (lower, upper) = apply_bounds(&prices, &config.bounds, rng)?;

    let mut records = build_records(&dates, &config.crop, &prices, &lower, &upper);
    sort_records(&mut records);
    debug!(rows = records.len(), crop = %config.crop, "built price records");

    Ok((records, params))
}
