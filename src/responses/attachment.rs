// responses/attachment.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Return a file download as HTTP response
pub fn attachment_response(body: Vec<u8>, content_type: &str, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

pub fn csv_response(csv: String, filename: &str) -> ResultResp {
    attachment_response(csv.into_bytes(), mime::TEXT_CSV_UTF_8.as_ref(), filename)
}

pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    attachment_response(buffer, XLSX_CONTENT_TYPE, filename)
}
