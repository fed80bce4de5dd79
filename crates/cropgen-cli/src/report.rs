//! Console report printed after a dataset is written.

use std::fmt::Write;

use cropgen::record::PriceRecord;
use cropgen::summary::DatasetSummary;

/// Decimal places shown for prices in the preview table.
const PREVIEW_PRECISION: usize = 6;

/// Renders the full report: file name, shape, date span, crop count and a
/// preview of the first `preview_rows` records.
#[must_use]
pub fn render_report(
    file: &str,
    summary: &DatasetSummary,
    records: &[PriceRecord],
    preview_rows: usize,
) -> String {
    let mut out = String::new();
    let (rows, columns) = summary.shape();

    let _ = writeln!(out, "CSV file '{file}' has been created successfully.");
    let _ = writeln!(out);
    let _ = writeln!(out, "Dataset shape: ({rows}, {columns})");
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => {
            let _ = writeln!(out, "Date range: {first} to {last}");
        }
        _ => {
            let _ = writeln!(out, "Date range: (empty)");
        }
    }
    let _ = writeln!(out, "Number of crops: {}", summary.crop_count);

    if preview_rows > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "First few rows of the dataset:");
        out.push_str(&render_preview(records, preview_rows));
    }

    out
}

/// Renders the first `rows` records as a right-aligned table with a leading
/// row-number column.
#[must_use]
pub fn render_preview(records: &[PriceRecord], rows: usize) -> String {
    let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.min(records.len()) + 1);

    let mut header = vec![String::new()];
    header.extend(PriceRecord::HEADERS.iter().map(ToString::to_string));
    table.push(header);

    for (i, record) in records.iter().take(rows).enumerate() {
        table.push(vec![
            i.to_string(),
            record.date.to_string(),
            record.crop.clone(),
            format!("{:.PREVIEW_PRECISION$}", record.modal_price),
            format!("{:.PREVIEW_PRECISION$}", record.lower_modal_price),
            format!("{:.PREVIEW_PRECISION$}", record.upper_modal_price),
        ]);
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|col| table.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &table {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}
