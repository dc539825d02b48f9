mod batch;
mod document;
mod extract;
mod http;
mod inner_text;
mod models;
mod page;
mod scraper_error;

pub use batch::{parse_url_list, scrape_all};
pub use document::{DocumentSession, DomElement, PageSource};
pub use extract::{extract, ExtractOptions, LANDMARK};
pub use http::{HttpLauncher, HttpSource, DEFAULT_USER_AGENT};
pub use models::{raw_or_sentinel, FailedListing, RawListing, ScrapeOutcome, NOT_FOUND};
pub use page::{ListingPage, PageElement, SessionLauncher};
pub use scraper_error::ScraperError;
