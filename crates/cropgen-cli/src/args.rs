//! CLI argument parsing module.
//!
//! This module defines the command-line interface for cropgen using clap.
//! Every option has a default, so running `cropgen` with no arguments writes
//! the standard 351-row Soya dataset to a timestamped file in the current
//! directory.
//!
//! # Examples
//!
//! ```bash
//! # Default dataset, random seed
//! cropgen
//!
//! # Reproducible run
//! cropgen --seed 42
//!
//! # Different crop, window and size, written into ./data
//! cropgen --crop Wheat --start 2015-01-01 --end 2020-12-31 --rows 500 -d data
//!
//! # CSV to stdout
//! cropgen --seed 7 -o -
//! ```

use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use cropgen::generator::{GeneratorConfig, DEFAULT_CROP, DEFAULT_ROWS};

use crate::csv_writer::{timestamped_file_name, OutputDest};
use crate::error::{CliError, Result};

/// Date format accepted for `--start` and `--end`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// cropgen: synthetic commodity price CSV generator
#[derive(Parser, Debug, Clone)]
#[command(name = "cropgen")]
#[command(author, version, about = "Generate synthetic commodity price datasets")]
#[command(long_about = "cropgen synthesizes a daily commodity price series with a linear \
    trend, a yearly seasonal cycle and Gaussian noise, adds randomized lower and upper \
    bounds, and writes the result to a timestamped CSV file.")]
pub struct Args {
    /// Number of rows to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// First calendar day of the window (YYYY-MM-DD)
    #[arg(long, default_value = "2010-04-06")]
    pub start: String,

    /// Last calendar day of the window (YYYY-MM-DD)
    #[arg(long, default_value = "2017-05-12")]
    pub end: String,

    /// Crop label written on every row
    #[arg(short, long, default_value = DEFAULT_CROP)]
    pub crop: String,

    /// Seed for the random number generator (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory for the timestamped output file
    #[arg(short = 'd', long, default_value = ".")]
    pub output_dir: String,

    /// Explicit output path; `-` writes CSV to stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of rows shown in the console preview
    #[arg(long, default_value_t = 15)]
    pub preview: usize,

    /// Suppress the console report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Builds the generator configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for an unparsable date, a zero
    /// row count or an empty crop label.
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        if self.rows == 0 {
            return Err(CliError::InvalidArgument {
                argument: "rows".to_string(),
                reason: "must be positive".to_string(),
                suggestion: Some(format!("Use a positive integer like {DEFAULT_ROWS}")),
            });
        }

        let crop = self.crop.trim();
        if crop.is_empty() {
            return Err(CliError::InvalidArgument {
                argument: "crop".to_string(),
                reason: "cannot be empty".to_string(),
                suggestion: Some(format!("Use a label like {DEFAULT_CROP}")),
            });
        }

        Ok(GeneratorConfig {
            rows: self.rows,
            start: parse_date("start", &self.start)?,
            end: parse_date("end", &self.end)?,
            crop: crop.to_string(),
            seed: self.seed,
            ..GeneratorConfig::default()
        })
    }

    /// Resolves where the CSV goes. `timestamp` names the file when no
    /// explicit `--output` is given.
    #[must_use]
    pub fn output_dest(&self, timestamp: &str) -> OutputDest {
        match self.output.as_deref() {
            Some("-") => OutputDest::Stdout,
            Some(path) => OutputDest::File(path.to_string()),
            None => {
                let name = timestamped_file_name(self.crop.trim(), timestamp);
                OutputDest::File(Path::new(&self.output_dir).join(name).display().to_string())
            }
        }
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(argument: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| CliError::InvalidArgument {
        argument: argument.to_string(),
        reason: format!("cannot parse '{value}' as a date: {e}"),
        suggestion: Some("Use the format YYYY-MM-DD (e.g., 2010-04-06)".to_string()),
    })
}
