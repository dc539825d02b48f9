// extract.rs
use crate::scraper::models::{FailedListing, RawListing, ScrapeOutcome};
use crate::scraper::page::{ListingPage, PageElement};
use crate::scraper::ScraperError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Element every listing page renders once its layout is in place.
pub const LANDMARK: &str = "#details-section";

// First div after the landmark, in document order.
const DESCRIPTION: &str = "#details-section ~ div";
const DETAILS_TABLE: &str = "table.stripedTable tbody";
const SECTION_HEADING: &str = "div.section-heading";
const FEATURES_LABEL: &str = "Features & Amenities";
const FEATURES_LIST: &str = "ul.striped.check-bullets";
const GALLERY_IMAGES: &str = "#photo-section img.photo-height";

static MLS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"mls-(\w+)/").expect("valid mls regex"));

// "For Sale $779,000 - 602-8188 FRASER STREET, Vancouver, BC | Zealty"
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d{1,3}(?:,\d{3})*)").expect("valid price regex"));
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-\s*(.*?)\s*\|").expect("valid address regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub navigation_timeout: Duration,
    pub landmark_timeout: Duration,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            navigation_timeout: Duration::from_secs(60),
            landmark_timeout: Duration::from_secs(30),
        }
    }
}

/// Load `url` in `page` and lift its listing attributes.
///
/// Never fails: a page that can't be loaded, or never shows the landmark, becomes a
/// [`ScrapeOutcome::Failed`]. Anything missing past that point is recorded as not found.
pub fn extract<P: ListingPage>(page: &mut P, url: &str, options: &ExtractOptions) -> ScrapeOutcome {
    match try_extract(page, url, options) {
        Ok(listing) => ScrapeOutcome::Listing(listing),
        Err(e) => {
            tracing::warn!(%url, error = %e, "⚠️ Error scraping URL");
            ScrapeOutcome::Failed(FailedListing {
                url: url.to_string(),
                error: e.to_string(),
            })
        }
    }
}

fn try_extract<P: ListingPage>(
    page: &mut P,
    url: &str,
    options: &ExtractOptions,
) -> Result<RawListing, ScraperError> {
    let mls = mls_from_url(url);

    page.goto(url, options.navigation_timeout)?;
    page.wait_for_selector(LANDMARK, options.landmark_timeout)?;

    let title = page.title()?;

    let description = page
        .query_selector(DESCRIPTION)?
        .map(|el| el.inner_text().trim().to_string());

    let details = property_details(&*page)?;
    let detail = |key: &str| details.get(key).cloned();

    Ok(RawListing {
        url: url.to_string(),
        listing_price: price_from_title(&title),
        listing_address: address_from_title(&title),
        description,
        mls,
        bedrooms: detail("bedrooms"),
        bathrooms: detail("bathrooms"),
        size: detail("size_of_house"),
        age: detail("age_of_house"),
        listing_style: detail("style_of_house"),
        maintenance_fee: detail("maintenance_fee"),
        property_taxes: detail("property_taxes"),
        features: features(&*page)?,
        gallery: gallery(&*page, url)?,
    })
}

pub fn mls_from_url(url: &str) -> Option<String> {
    MLS_RE.captures(url).map(|caps| caps[1].to_string())
}

/// Asking price with grouping commas removed.
pub fn price_from_title(title: &str) -> Option<String> {
    PRICE_RE
        .captures(title)
        .map(|caps| caps[1].replace(',', ""))
}

pub fn address_from_title(title: &str) -> Option<String> {
    ADDRESS_RE.captures(title).map(|caps| caps[1].to_string())
}

/// Lookup key for a details-table label: "Size of House\nApprox" -> "size_of_house".
pub fn detail_key(label: &str) -> String {
    first_line(label)
        .to_lowercase()
        .replace(' ', "_")
        .replace('/', "_")
}

/// Display value for a details-table cell: "$1,200 sq ft\n(estimate)" -> "1,200 sq ft".
pub fn detail_value(text: &str) -> String {
    first_line(text)
        .trim_start()
        .trim_start_matches('$')
        .trim()
        .to_string()
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or_default()
}

fn property_details<P: ListingPage>(page: &P) -> Result<HashMap<String, String>, ScraperError> {
    let mut details = HashMap::new();

    let Some(table) = page.query_selector(DETAILS_TABLE)? else {
        return Ok(details);
    };

    for row in table.query_selector_all("tr")? {
        let cells = row.query_selector_all("td")?;
        if cells.len() < 2 {
            continue;
        }
        details.insert(
            detail_key(&cells[0].inner_text()),
            detail_value(&cells[1].inner_text()),
        );
    }

    Ok(details)
}

fn features<P: ListingPage>(page: &P) -> Result<Vec<String>, ScraperError> {
    let heading = page
        .query_selector_all(SECTION_HEADING)?
        .into_iter()
        .find(|el| has_text(&el.inner_text(), FEATURES_LABEL));

    // The list lives in the div right after the heading.
    let Some(section) = heading
        .and_then(|h| h.next_element_sibling())
        .filter(|el| el.tag_name() == "div")
    else {
        return Ok(Vec::new());
    };

    let Some(list) = section.query_selector(FEATURES_LIST)? else {
        return Ok(Vec::new());
    };

    Ok(list
        .query_selector_all("li")?
        .iter()
        .map(|li| li.inner_text().trim().to_string())
        .collect())
}

fn gallery<P: ListingPage>(page: &P, url: &str) -> Result<Vec<String>, ScraperError> {
    let base = Url::parse(url).ok();

    Ok(page
        .query_selector_all(GALLERY_IMAGES)?
        .iter()
        .filter_map(|img| img.get_attribute("src"))
        .filter(|src| !src.trim().is_empty() && !is_inline_data(src))
        .map(|src| absolutize(base.as_ref(), &src))
        .collect())
}

fn is_inline_data(src: &str) -> bool {
    src.trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

fn absolutize(base: Option<&Url>, src: &str) -> String {
    base.and_then(|b| b.join(src.trim()).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| src.to_string())
}

/// Case-insensitive, whitespace-insensitive substring match.
fn has_text(haystack: &str, needle: &str) -> bool {
    let norm = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    norm(haystack).contains(&norm(needle))
}
