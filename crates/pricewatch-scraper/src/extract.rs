//! Per-site HTML field extraction.
//!
//! Listing pages differ only in which CSS selectors locate the three fields
//! we care about, so each site gets a [`SiteProfile`] and competitors pick a
//! profile by key. The `books` profile (books.toscrape.com markup) is built
//! in; further profiles come from the targets file.

use std::collections::HashMap;

use scraper::{Html, Selector};

use pricewatch_core::targets::{CompetitorTarget, SiteSelectors, TargetsFile, DEFAULT_SITE};

use crate::error::ScraperError;

/// The three text fields extracted from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub raw_price: String,
    pub availability: String,
}

/// One compiled selector plus its source CSS, kept for error messages.
#[derive(Debug, Clone)]
struct FieldSelector {
    css: String,
    compiled: Selector,
}

/// Compiled selectors for one site's listing markup.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    title: FieldSelector,
    price: FieldSelector,
    availability: FieldSelector,
}

impl SiteProfile {
    /// Compiles a profile from selector strings.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] naming the offending
    /// selector if any of the three fails to parse.
    pub fn compile(site: &str, selectors: &SiteSelectors) -> Result<Self, ScraperError> {
        let parse = |css: &str| {
            Selector::parse(css)
                .map(|compiled| FieldSelector {
                    css: css.to_owned(),
                    compiled,
                })
                .map_err(|_| ScraperError::InvalidSelector {
                    site: site.to_owned(),
                    selector: css.to_owned(),
                })
        };
        Ok(Self {
            title: parse(&selectors.title)?,
            price: parse(&selectors.price)?,
            availability: parse(&selectors.availability)?,
        })
    }
}

/// Site profiles available to a run, keyed by the `site` value competitors
/// reference in the targets file.
#[derive(Debug)]
pub struct ExtractorRegistry {
    profiles: HashMap<String, SiteProfile>,
}

impl ExtractorRegistry {
    /// Builds the registry from built-in profiles plus any custom `sites`
    /// entries in the targets file, then checks that every competitor's
    /// `site` key resolves.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidSelector`] — a custom profile fails to compile.
    /// - [`ScraperError::UnknownSite`] — a competitor references a site key
    ///   with no profile.
    pub fn from_targets(targets: &TargetsFile) -> Result<Self, ScraperError> {
        let mut profiles = HashMap::new();
        profiles.insert(
            DEFAULT_SITE.to_owned(),
            SiteProfile::compile(DEFAULT_SITE, &books_selectors())?,
        );

        for (site, selectors) in &targets.sites {
            profiles.insert(site.clone(), SiteProfile::compile(site, selectors)?);
        }

        let registry = Self { profiles };
        for product in &targets.products {
            for competitor in &product.competitors {
                registry.profile_for(competitor)?;
            }
        }
        Ok(registry)
    }

    /// Looks up the profile for one competitor.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::UnknownSite`] when the competitor's `site` key
    /// has no registered profile.
    pub fn profile_for(&self, competitor: &CompetitorTarget) -> Result<&SiteProfile, ScraperError> {
        self.profiles
            .get(&competitor.site)
            .ok_or_else(|| ScraperError::UnknownSite {
                site: competitor.site.clone(),
                competitor: competitor.name.clone(),
            })
    }
}

/// Selectors for books.toscrape.com-style product pages.
fn books_selectors() -> SiteSelectors {
    SiteSelectors {
        title: "h1".to_string(),
        price: ".price_color".to_string(),
        availability: ".instock".to_string(),
    }
}

/// Extracts the three listing fields from a fetched page.
///
/// Text is whitespace-normalized: runs of whitespace collapse to single
/// spaces and leading/trailing whitespace is dropped, so nested markup and
/// indentation do not leak into field values.
///
/// # Errors
///
/// Returns [`ScraperError::MissingField`] naming the first field whose
/// selector matches nothing (or only whitespace) — any missing field is an
/// extraction failure for the whole page.
pub fn extract_listing(html: &str, profile: &SiteProfile) -> Result<Listing, ScraperError> {
    let document = Html::parse_document(html);

    let title = select_text(&document, &profile.title, "title")?;
    let raw_price = select_text(&document, &profile.price, "price")?;
    let availability = select_text(&document, &profile.availability, "availability")?;

    Ok(Listing {
        title,
        raw_price,
        availability,
    })
}

fn select_text(
    document: &Html,
    field_selector: &FieldSelector,
    field: &str,
) -> Result<String, ScraperError> {
    let missing = || ScraperError::MissingField {
        field: field.to_owned(),
        selector: field_selector.css.clone(),
    };

    let element = document
        .select(&field_selector.compiled)
        .next()
        .ok_or_else(missing)?;

    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return Err(missing());
    }

    Ok(text)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
