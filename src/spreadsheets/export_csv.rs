use crate::domain::{normalize, NormalizedRow};
use crate::scraper::ScrapeOutcome;
use crate::spreadsheets::ExportError;

/// Header plus one line per row, columns in schema order.
///
/// No rows gives an empty string, not a lone header line.
pub fn rows_to_csv(rows: &[NormalizedRow]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.serialize(row)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;

    Ok(String::from_utf8(buffer)?)
}

/// Normalize scrape outcomes and render them as CSV.
pub fn convert_to_csv(outcomes: &[ScrapeOutcome]) -> Result<String, ExportError> {
    rows_to_csv(&normalize(outcomes))
}
