use crate::scraper::{DocumentSession, PageSource, ScraperError, SessionLauncher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const LISTING_URL: &str =
    "https://www.zealty.ca/mls-R2712345/602-8188-FRASER-STREET-Vancouver-BC/";

/// Trimmed-down copy of a real listing page.
pub const LISTING_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>For Sale $779,000 - 602-8188 FRASER STREET, Vancouver, BC | Zealty</title>
</head>
<body>
  <div id="details-section"><h2>Description</h2></div>
  <div class="description"><p>Bright corner unit with   views.</p><p>Walk to shops.</p></div>

  <div class="section-heading">Property Details</div>
  <div>
    <table class="stripedTable">
      <tr><td>Bedrooms</td><td>2</td></tr>
      <tr><td>Bathrooms</td><td>2</td></tr>
      <tr><td>Size of House<br><small>Approx</small></td><td>$1,200 sq ft<div>(estimate)</div></td></tr>
      <tr><td>Age of House</td><td>12 years</td></tr>
      <tr><td>Style of House</td><td>Corner Unit</td></tr>
      <tr><td>Maintenance Fee</td><td>$450.00<br>per month</td></tr>
      <tr><td>Property Taxes</td><td>$2,345.67 (2023)</td></tr>
      <tr><td colspan="2">Listing courtesy of Example Realty</td></tr>
    </table>
  </div>

  <div class="section-heading">Features &amp; Amenities</div>
  <div><ul class="striped check-bullets"><li>Pool</li><li> Garage </li></ul></div>

  <div id="photo-section">
    <img class="photo-height" src="https://img.zealty.ca/1.jpg">
    <img class="photo-height" src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
    <img class="photo-height">
    <img class="photo-height" src="/photos/2.jpg">
    <img class="thumb" src="https://img.zealty.ca/thumb.jpg">
  </div>
</body>
</html>"#;

/// Has the landmark and nothing else.
pub const MINIMAL_HTML: &str =
    r#"<html><head><title>Listing</title></head><body><div id="details-section"></div></body></html>"#;

pub struct FixtureSource(HashMap<String, String>);

impl FixtureSource {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self(
            pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
        )
    }
}

impl PageSource for FixtureSource {
    fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, ScraperError> {
        self.0.get(url).cloned().ok_or_else(|| ScraperError::Navigation {
            url: url.to_string(),
            reason: "HTTP 404 Not Found".into(),
        })
    }
}

pub fn fixture_session(pages: &[(&str, &str)]) -> DocumentSession<FixtureSource> {
    DocumentSession::new(FixtureSource::new(pages))
}

/// Launches sessions over a fixed set of pages and counts how often it was asked to.
pub struct FixtureLauncher {
    pages: Option<Vec<(String, String)>>,
    launches: AtomicUsize,
}

impl FixtureLauncher {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: Some(
                pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            ),
            launches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            pages: None,
            launches: AtomicUsize::new(0),
        }
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }
}

impl SessionLauncher for FixtureLauncher {
    type Session = DocumentSession<FixtureSource>;

    fn launch(&self) -> Result<Self::Session, ScraperError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        let pages = self
            .pages
            .as_ref()
            .ok_or_else(|| ScraperError::Launch("browser binary not found".into()))?;
        let borrowed: Vec<(&str, &str)> = pages
            .iter()
            .map(|(url, html)| (url.as_str(), html.as_str()))
            .collect();
        Ok(fixture_session(&borrowed))
    }
}
