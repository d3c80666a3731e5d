pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;

pub use client::PageClient;
pub use error::ScraperError;
pub use extract::{extract_listing, ExtractorRegistry, Listing, SiteProfile};
pub use normalize::normalize_price;
