//! CSV output module for writing price records.
//!
//! The exported table has one row per record and the header
//!
//! ```text
//! Price_Date,Crop,Modal_Price,lower_Modal_Price,upper_Modal_Price
//! ```
//!
//! Dates are written as `YYYY-MM-DD` and prices with full `f64` precision.
//! The header is written even when there are no records.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::{Local, NaiveDate};
use cropgen::record::PriceRecord;
use serde::Serialize;

use crate::error::{CliError, Result};

/// Timestamp format embedded in generated file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Create a writer for this output destination.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// One CSV row, in header order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    crop: &'a str,
    modal_price: f64,
    lower_modal_price: f64,
    upper_modal_price: f64,
}

impl<'a> From<&'a PriceRecord> for CsvRow<'a> {
    fn from(record: &'a PriceRecord) -> Self {
        Self {
            date: record.date,
            crop: &record.crop,
            modal_price: record.modal_price,
            lower_modal_price: record.lower_modal_price,
            upper_modal_price: record.upper_modal_price,
        }
    }
}

/// Write records as CSV to any writer.
pub fn write_records<W: Write>(writer: W, records: &[PriceRecord]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(PriceRecord::HEADERS)?;
    for record in records {
        csv.serialize(CsvRow::from(record))?;
    }

    csv.flush()?;
    Ok(())
}

/// Write records to an output destination.
pub fn write_to_dest(records: &[PriceRecord], dest: &OutputDest) -> Result<()> {
    let writer = dest.writer()?;
    write_records(writer, records).map_err(|err| match (err, dest) {
        (CliError::IoError { source, path: None }, OutputDest::File(path)) => CliError::IoError {
            source,
            path: Some(path.clone()),
        },
        (err, _) => err,
    })
}

/// Current local time formatted for file names (`YYYYMMDD_HHMMSS`).
#[must_use]
pub fn generation_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Builds `<crop>_<timestamp>.csv`, lowercasing the crop label and replacing
/// anything other than ASCII letters and digits with `_`.
#[must_use]
pub fn timestamped_file_name(crop: &str, timestamp: &str) -> String {
    let stem: String = crop
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_{timestamp}.csv")
}
