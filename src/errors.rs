// errors.rs
use crate::scraper::ScraperError;
use crate::spreadsheets::ExportError;
use thiserror::Error;

/// Errors surfaced to the browser, either from routing or from the layers below.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScraperError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::Scrape(_) => 502,
            ServerError::Export(_) | ServerError::InternalError => 500,
        }
    }
}
