// src/domain/normalize.rs

use crate::domain::vocabulary::{Vocabulary, LISTING_SUBTYPES};
use crate::scraper::{raw_or_sentinel, FailedListing, RawListing, ScrapeOutcome};
use serde::Serialize;

/// Export columns, in output order.
pub const COLUMNS: [&str; 15] = [
    "listing_price",
    "listing_address",
    "description",
    "mls",
    "bedrooms",
    "bathrooms",
    "size",
    "age",
    "listing_style",
    "maintenance_fee",
    "property_taxes",
    "features_&_amenities",
    "gallery",
    "url",
    "error",
];

/// One listing flattened into the import schema.
///
/// Every row has every column whether or not the listing was scraped; an empty string
/// means "absent or not accepted". Field order here is the column order on export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedRow {
    pub listing_price: String,
    pub listing_address: String,
    pub description: String,
    pub mls: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub size: String,
    pub age: String,
    pub listing_style: String,
    pub maintenance_fee: String,
    pub property_taxes: String,
    #[serde(rename = "features_&_amenities")]
    pub features_and_amenities: String,
    pub gallery: String,
    pub url: String,
    pub error: String,
}

impl NormalizedRow {
    /// Values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 15] {
        [
            &self.listing_price,
            &self.listing_address,
            &self.description,
            &self.mls,
            &self.bedrooms,
            &self.bathrooms,
            &self.size,
            &self.age,
            &self.listing_style,
            &self.maintenance_fee,
            &self.property_taxes,
            &self.features_and_amenities,
            &self.gallery,
            &self.url,
            &self.error,
        ]
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Map each outcome to a row, in input order. Pure and deterministic.
pub fn normalize(outcomes: &[ScrapeOutcome]) -> Vec<NormalizedRow> {
    outcomes
        .iter()
        .map(|outcome| match outcome {
            ScrapeOutcome::Listing(listing) => from_listing(listing),
            ScrapeOutcome::Failed(failed) => from_failure(failed),
        })
        .collect()
}

fn from_failure(failed: &FailedListing) -> NormalizedRow {
    NormalizedRow {
        url: failed.url.clone(),
        error: failed.error.clone(),
        ..NormalizedRow::default()
    }
}

fn from_listing(listing: &RawListing) -> NormalizedRow {
    NormalizedRow {
        listing_price: text(&listing.listing_price),
        listing_address: text(&listing.listing_address),
        description: text(&listing.description),
        mls: text(&listing.mls),
        bedrooms: text(&listing.bedrooms),
        bathrooms: text(&listing.bathrooms),
        size: text(&listing.size),
        age: text(&listing.age),
        listing_style: choice(&LISTING_SUBTYPES, &listing.listing_style),
        maintenance_fee: text(&listing.maintenance_fee),
        property_taxes: text(&listing.property_taxes),
        features_and_amenities: join_non_empty(&listing.features, "; "),
        gallery: listing.gallery.join(", "),
        url: listing.url.clone(),
        error: String::new(),
    }
}

// Pass-through: a field that was not found keeps its sentinel.
fn text(value: &Option<String>) -> String {
    raw_or_sentinel(value).trim().to_string()
}

// Fail-closed: only vocabulary hits survive, everything else is blank.
fn choice(vocabulary: &Vocabulary, value: &Option<String>) -> String {
    value
        .as_deref()
        .and_then(|raw| vocabulary.label(raw))
        .unwrap_or_default()
        .to_string()
}

fn join_non_empty(items: &[String], sep: &str) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}
