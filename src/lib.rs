pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod responses;
pub mod router;
pub mod scraper;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;
