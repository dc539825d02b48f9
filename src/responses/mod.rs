pub mod attachment;
pub mod html;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

pub use attachment::{csv_response, xlsx_response};
pub use html::html_response;
