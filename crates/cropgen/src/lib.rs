//! cropgen: synthetic commodity price series
//!
//! This crate generates fake daily commodity prices shaped by a linear trend,
//! a yearly seasonal cycle and Gaussian noise, with randomized lower and
//! upper bounds for each day.
//!
//! # Quick Start
//!
//! ```
//! use cropgen::prelude::*;
//!
//! let config = GeneratorConfig { seed: Some(7), ..GeneratorConfig::default() };
//! let dataset = generate(&config).unwrap();
//!
//! let summary = dataset.summary();
//! assert_eq!(summary.shape(), (351, 5));
//! assert_eq!(summary.crop_count, 1);
//! ```
//!
//! # Modules
//!
//! - [`params`] - Uniform sampling of the series parameters and bound factors
//! - [`dates`] - Calendar window and evenly spaced date selection
//! - [`series`] - Price curve and bound series
//! - [`record`] - Price records and their ordering
//! - [`generator`] - The end-to-end pipeline
//! - [`summary`] - Shape and coverage for reporting
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dates;
pub mod error;
pub mod generator;
pub mod params;
pub mod record;
pub mod series;
pub mod summary;

pub use error::{Error, Result};

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::generator::{generate, Dataset, GeneratorConfig};
    pub use crate::params::{BoundFactors, ParamRanges, PriceParams, UniformRange};
    pub use crate::record::PriceRecord;
    pub use crate::summary::DatasetSummary;
}
