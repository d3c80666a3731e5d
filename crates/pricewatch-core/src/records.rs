use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful fetch+extract of a competitor listing page.
///
/// A failed fetch or extraction yields no `ScrapeResult` at all; there is no
/// partial form of this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// Product title as extracted from the page, not the configured name.
    pub product_name: String,
    pub competitor: String,
    /// Unparsed price text, in whatever currency/locale format the page uses.
    pub raw_price: String,
    pub availability: String,
    pub timestamp: DateTime<Utc>,
}

/// A [`ScrapeResult`] after price normalization and baseline comparison.
///
/// Immutable once computed. `price == None` (a normalization failure) forces
/// `previous_price` and `price_change` to `None` as well; the record is kept
/// in the report rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub product_name: String,
    pub competitor: String,
    pub raw_price: String,
    pub availability: String,
    pub price: Option<f64>,
    pub previous_price: Option<f64>,
    pub price_change: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl PriceRecord {
    /// Builds a record from a scrape result and its normalized price.
    ///
    /// `previous_price` and `price_change` start empty; they are filled by
    /// [`crate::history::apply_history`].
    #[must_use]
    pub fn from_scrape(result: ScrapeResult, price: Option<f64>) -> Self {
        Self {
            product_name: result.product_name,
            competitor: result.competitor,
            raw_price: result.raw_price,
            availability: result.availability,
            price,
            previous_price: None,
            price_change: None,
            timestamp: result.timestamp,
        }
    }
}
