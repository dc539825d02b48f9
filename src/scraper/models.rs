// models.rs

/// Raw-layer marker for "the page did not have this".
pub const NOT_FOUND: &str = "N/A";

/// Attributes lifted from one listing page.
///
/// `None` means the field was not found on the page; it renders as [`NOT_FOUND`].
/// An empty `Some("")` means the element existed but carried no text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    pub url: String,

    pub listing_price: Option<String>,
    pub listing_address: Option<String>,
    pub description: Option<String>,
    pub mls: Option<String>,

    // From the property details table
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub size: Option<String>,
    pub age: Option<String>,
    pub listing_style: Option<String>,
    pub maintenance_fee: Option<String>,
    pub property_taxes: Option<String>,

    pub features: Vec<String>,
    pub gallery: Vec<String>,
}

/// A URL that could not be extracted, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedListing {
    pub url: String,
    pub error: String,
}

/// Exactly one of these is produced per input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Listing(RawListing),
    Failed(FailedListing),
}

impl ScrapeOutcome {
    pub fn url(&self) -> &str {
        match self {
            ScrapeOutcome::Listing(listing) => listing.url.as_str(),
            ScrapeOutcome::Failed(failed) => failed.url.as_str(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ScrapeOutcome::Listing(_) => None,
            ScrapeOutcome::Failed(failed) => Some(failed.error.as_str()),
        }
    }
}

/// The raw value of a field, with misses shown as the sentinel.
pub fn raw_or_sentinel(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_FOUND)
}
