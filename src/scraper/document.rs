// document.rs
//! `ListingPage` over a parsed HTML document.
//!
//! Navigation asks a `PageSource` for the page markup; everything after that is answered
//! from the parsed DOM.

use crate::scraper::inner_text::inner_text;
use crate::scraper::page::{ListingPage, PageElement};
use crate::scraper::ScraperError;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

/// Where page markup comes from: the network in production, a fixture map in tests.
pub trait PageSource {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, ScraperError>;
}

struct LoadedPage {
    url: String,
    document: Html,
}

pub struct DocumentSession<S: PageSource> {
    source: S,
    current: Option<LoadedPage>,
}

impl<S: PageSource> DocumentSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(|page| page.url.as_str())
    }

    fn document(&self) -> Result<&Html, ScraperError> {
        self.current
            .as_ref()
            .map(|page| &page.document)
            .ok_or(ScraperError::NotNavigated)
    }
}

impl<S: PageSource> Drop for DocumentSession<S> {
    fn drop(&mut self) {
        tracing::debug!(last_url = ?self.current_url(), "browsing session closed");
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl<S: PageSource> ListingPage for DocumentSession<S> {
    type Element<'a> = DomElement<'a> where Self: 'a;

    fn goto(&mut self, url: &str, timeout: Duration) -> Result<(), ScraperError> {
        // A failed navigation leaves no page behind, same as a blank tab.
        self.current = None;
        let markup = self.source.fetch(url, timeout)?;
        self.current = Some(LoadedPage {
            url: url.to_string(),
            document: Html::parse_document(&markup),
        });
        Ok(())
    }

    fn wait_for_selector(&mut self, selector: &str, timeout: Duration) -> Result<(), ScraperError> {
        // The markup is fully loaded by `goto`; if the landmark isn't there now it never will be.
        if self.query_selector(selector)?.is_some() {
            Ok(())
        } else {
            Err(ScraperError::LandmarkTimeout {
                selector: selector.to_string(),
                timeout,
            })
        }
    }

    fn title(&self) -> Result<String, ScraperError> {
        let title = match self.query_selector("title")? {
            Some(el) => el.0.text().collect::<String>(),
            None => String::new(),
        };
        Ok(title.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    fn query_selector(&self, selector: &str) -> Result<Option<DomElement<'_>>, ScraperError> {
        let sel = parse_selector(selector)?;
        Ok(self.document()?.select(&sel).next().map(DomElement))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<DomElement<'_>>, ScraperError> {
        let sel = parse_selector(selector)?;
        Ok(self.document()?.select(&sel).map(DomElement).collect())
    }
}

#[derive(Clone, Copy)]
pub struct DomElement<'a>(ElementRef<'a>);

impl<'a> PageElement for DomElement<'a> {
    fn inner_text(&self) -> String {
        inner_text(self.0)
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn tag_name(&self) -> String {
        self.0.value().name().to_string()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.0
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(DomElement)
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>, ScraperError> {
        let sel = parse_selector(selector)?;
        Ok(self.0.select(&sel).next().map(DomElement))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self>, ScraperError> {
        let sel = parse_selector(selector)?;
        Ok(self.0.select(&sel).map(DomElement).collect())
    }
}
