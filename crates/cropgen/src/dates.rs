//! Calendar window and evenly spaced date selection.
//!
//! A dataset covers a fixed inclusive window of calendar days, but only a
//! requested number of those days become rows. The chosen days are spread
//! evenly across the window by linear interpolation of integer positions:
//! the first and last day are always included and interior positions are
//! rounded to the nearest integer, halves away from zero.
//!
//! ```
//! use cropgen::dates::evenly_spaced_indices;
//!
//! // 5 positions out of a 10-day window: 0, 2.25, 4.5, 6.75, 9
//! assert_eq!(evenly_spaced_indices(10, 5), vec![0, 2, 5, 7, 9]);
//! ```

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};

/// Returns every calendar day from `start` to `end`, both inclusive.
///
/// # Errors
///
/// Returns [`Error::InvalidDateRange`] if `end` is before `start`.
pub fn full_date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(Error::InvalidDateRange { start, end });
    }
    Ok(start.iter_days().take_while(|day| *day <= end).collect())
}

/// Picks `count` evenly spaced positions out of `0..len`.
///
/// Position `i` is `round(i * (len - 1) / (count - 1))`, with the last
/// position pinned to `len - 1`. The result is non-decreasing; it contains
/// duplicates only when `count > len`.
///
/// Edge cases: `count == 0` or `len == 0` gives an empty vector and
/// `count == 1` gives `[0]`.
#[must_use]
pub fn evenly_spaced_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }

    let last = len - 1;
    #[allow(clippy::cast_precision_loss)]
    let step = last as f64 / (count - 1) as f64;

    (0..count)
        .map(|i| {
            if i == count - 1 {
                last
            } else {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                let position = (i as f64 * step).round() as usize;
                position.min(last)
            }
        })
        .collect()
}

/// Selects `count` evenly spaced days from the inclusive window
/// `start..=end`.
///
/// Equivalent to indexing [`full_date_range`] with
/// [`evenly_spaced_indices`], without materializing the whole window.
///
/// # Errors
///
/// Returns [`Error::InvalidDateRange`] if `end` is before `start`, or
/// [`Error::DateOutOfRange`] if an offset cannot be represented.
pub fn sample_dates(start: NaiveDate, end: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(Error::InvalidDateRange { start, end });
    }

    let span = usize::try_from(end.signed_duration_since(start).num_days())
        .map_err(|_| Error::InvalidDateRange { start, end })?
        + 1;
    let indices = evenly_spaced_indices(span, count);
    debug!(window_days = span, count, "sampling evenly spaced dates");

    indices
        .into_iter()
        .map(|index| {
            let days = index as u64;
            start
                .checked_add_days(Days::new(days))
                .ok_or(Error::DateOutOfRange { start, days })
        })
        .collect()
}
