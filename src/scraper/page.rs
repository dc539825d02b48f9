// page.rs
//! The narrow slice of a browser the extractor needs.
//!
//! Extraction code only ever talks to these traits, so it runs the same against a live
//! HTTP-backed session and against fixture HTML in tests.

use crate::scraper::ScraperError;
use std::time::Duration;

/// One page of a browsing session, reused serially across URLs.
pub trait ListingPage {
    type Element<'a>: PageElement
    where
        Self: 'a;

    fn goto(&mut self, url: &str, timeout: Duration) -> Result<(), ScraperError>;

    fn wait_for_selector(&mut self, selector: &str, timeout: Duration) -> Result<(), ScraperError>;

    fn title(&self) -> Result<String, ScraperError>;

    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element<'_>>, ScraperError>;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element<'_>>, ScraperError>;
}

/// A handle to one element of the currently loaded page.
pub trait PageElement: Sized {
    /// Rendered text, with line breaks where block elements and `<br>` would put them.
    fn inner_text(&self) -> String;

    fn get_attribute(&self, name: &str) -> Option<String>;

    fn tag_name(&self) -> String;

    /// Next sibling that is an element (text and comments are skipped).
    fn next_element_sibling(&self) -> Option<Self>;

    fn query_selector(&self, selector: &str) -> Result<Option<Self>, ScraperError>;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self>, ScraperError>;
}

/// Opens a fresh session for one batch run. Dropping the session closes it.
pub trait SessionLauncher {
    type Session: ListingPage;

    fn launch(&self) -> Result<Self::Session, ScraperError>;
}
