//! Dataset summary statistics for console reporting.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::record::PriceRecord;

/// Shape and coverage of a set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Number of records.
    pub rows: usize,
    /// Number of exported columns.
    pub columns: usize,
    /// Earliest date, `None` for an empty dataset.
    pub first_date: Option<NaiveDate>,
    /// Latest date, `None` for an empty dataset.
    pub last_date: Option<NaiveDate>,
    /// Number of distinct crop labels.
    pub crop_count: usize,
}

impl DatasetSummary {
    /// Summarizes `records`. Does not assume they are sorted.
    #[must_use]
    pub fn from_records(records: &[PriceRecord]) -> Self {
        let crops: BTreeSet<&str> = records.iter().map(|r| r.crop.as_str()).collect();
        Self {
            rows: records.len(),
            columns: PriceRecord::HEADERS.len(),
            first_date: records.iter().map(|r| r.date).min(),
            last_date: records.iter().map(|r| r.date).max(),
            crop_count: crops.len(),
        }
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }
}
