//! Price records and their ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// One row of a generated dataset.
///
/// The bounds are not guaranteed to bracket the modal price; see
/// [`crate::series::apply_bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Commodity label, constant across a dataset.
    pub crop: String,
    /// Representative price for the day.
    pub modal_price: f64,
    /// Lower price bound.
    pub lower_modal_price: f64,
    /// Upper price bound.
    pub upper_modal_price: f64,
}

impl PriceRecord {
    /// Column names of the exported table, in field order.
    pub const HEADERS: [&'static str; 5] = [
        "Price_Date",
        "Crop",
        "Modal_Price",
        "lower_Modal_Price",
        "upper_Modal_Price",
    ];

    /// Orders by date, then crop label.
    #[must_use]
    pub fn cmp_date_crop(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.crop.cmp(&other.crop))
    }
}

/// Zips per-day columns into records tagged with `crop`.
///
/// The output is as long as the shortest input.
#[must_use]
pub fn build_records(
    dates: &[NaiveDate],
    crop: &str,
    prices: &[f64],
    lower: &[f64],
    upper: &[f64],
) -> Vec<PriceRecord> {
    dates
        .iter()
        .zip(prices)
        .zip(lower)
        .zip(upper)
        .map(|(((&date, &modal_price), &lower), &upper)| PriceRecord {
            date,
            crop: crop.to_string(),
            modal_price,
            lower_modal_price: lower,
            upper_modal_price: upper,
        })
        .collect()
}

/// Sorts records by date, then crop label. The sort is stable, so records
/// with equal keys keep their generation order.
pub fn sort_records(records: &mut [PriceRecord]) {
    records.sort_by(PriceRecord::cmp_date_crop);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, crop: &str, modal_price: f64) -> PriceRecord {
        PriceRecord {
            date,
            crop: crop.to_string(),
            modal_price,
            lower_modal_price: modal_price * 0.9,
            upper_modal_price: modal_price * 1.1,
        }
    }

    #[test]
    fn test_build_records_zips_columns() {
        let dates = [date(2010, 4, 6), date(2010, 4, 13)];
        let records = build_records(&dates, "Soya", &[300.0, 310.0], &[270.0, 280.0], &[330.0, 340.0]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date, date(2010, 4, 13));
        assert_eq!(records[1].crop, "Soya");
        assert_eq!(records[1].modal_price, 310.0);
        assert_eq!(records[1].lower_modal_price, 280.0);
        assert_eq!(records[1].upper_modal_price, 340.0);
    }

    #[test]
    fn test_build_records_truncates_to_shortest() {
        let dates = [date(2010, 4, 6), date(2010, 4, 7), date(2010, 4, 8)];
        let records = build_records(&dates, "Soya", &[1.0, 2.0], &[0.9, 1.8, 2.7], &[1.1, 2.2, 3.3]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_sort_by_date() {
        let mut records = vec![
            record(date(2012, 1, 3), "Soya", 3.0),
            record(date(2012, 1, 1), "Soya", 1.0),
            record(date(2012, 1, 2), "Soya", 2.0),
        ];
        sort_records(&mut records);

        let prices: Vec<f64> = records.iter().map(|r| r.modal_price).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_ties_broken_by_crop() {
        let day = date(2012, 1, 1);
        let mut records = vec![
            record(day, "Wheat", 1.0),
            record(date(2011, 12, 31), "Wheat", 0.0),
            record(day, "Maize", 2.0),
        ];
        sort_records(&mut records);

        let crops: Vec<&str> = records.iter().map(|r| r.crop.as_str()).collect();
        assert_eq!(crops, vec!["Wheat", "Maize", "Wheat"]);
        assert_eq!(records[0].date, date(2011, 12, 31));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let day = date(2015, 6, 1);
        let mut records = vec![record(day, "Soya", 2.0), record(day, "Soya", 1.0)];
        sort_records(&mut records);
        assert_eq!(records[0].modal_price, 2.0);
        assert_eq!(records[1].modal_price, 1.0);
    }
}
