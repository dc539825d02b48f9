pub mod export_csv;
pub mod export_error;
pub mod export_xlsx;

pub use export_csv::{convert_to_csv, rows_to_csv};
pub use export_error::ExportError;
pub use export_xlsx::rows_to_xlsx;
