use crate::domain::{NormalizedRow, COLUMNS};
use crate::spreadsheets::ExportError;
use rust_xlsxwriter::Workbook;

/// Same table as the CSV export, as a single-sheet workbook.
pub fn rows_to_xlsx(rows: &[NormalizedRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name("Listings")
        .map_err(|e| ExportError::Xlsx(format!("Failed to name worksheet: {e}")))?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ExportError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, value) in row.values().iter().enumerate() {
            worksheet
                .write_string(r, col as u16, *value)
                .map_err(|e| {
                    ExportError::Xlsx(format!("Failed to write {} for row {}: {}", COLUMNS[col], r, e))
                })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Xlsx(format!("Failed to save workbook: {}", e)))
}
