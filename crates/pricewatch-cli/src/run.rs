//! One monitoring run: fetch, extract, normalize, compare, report.
//!
//! Strictly sequential — one competitor at a time, a randomized delay before
//! every fetch. A failed competitor is logged and skipped; only an empty
//! overall result set aborts the run.

use std::path::PathBuf;

use chrono::Utc;

use pricewatch_core::{
    apply_history, AppConfig, CompetitorTarget, PriceRecord, ScrapeResult, SimulatedHistory,
    TargetsFile,
};
use pricewatch_report::write_report;
use pricewatch_scraper::client::jittered_delay;
use pricewatch_scraper::{extract_listing, ExtractorRegistry, PageClient, ScraperError};

/// Runs the full pipeline against the given targets.
///
/// Returns the report path, or `None` when no competitor yielded data (in
/// which case no file is written).
///
/// # Errors
///
/// Fails on configuration-level problems (bad selectors, unknown site keys,
/// client construction) and on report I/O. Per-competitor fetch and
/// extraction failures never surface here; they are logged and skipped.
pub async fn execute(
    config: &AppConfig,
    targets: &TargetsFile,
) -> anyhow::Result<Option<PathBuf>> {
    let registry = ExtractorRegistry::from_targets(targets)?;
    let client = PageClient::new(config.request_timeout_secs, &config.user_agent)?;

    let scrapes = collect_scrapes(config, targets, &client, &registry).await;
    if scrapes.is_empty() {
        tracing::error!("no competitor yielded data; aborting run without a report");
        return Ok(None);
    }

    let records = build_records(scrapes);
    let path = write_report(&records, &config.report_dir, Utc::now())?;
    Ok(Some(path))
}

/// Fetches and extracts every configured competitor listing, in order.
///
/// Failures are logged per competitor and produce no result; the loop always
/// continues to the next competitor.
pub async fn collect_scrapes(
    config: &AppConfig,
    targets: &TargetsFile,
    client: &PageClient,
    registry: &ExtractorRegistry,
) -> Vec<ScrapeResult> {
    let mut scrapes = Vec::new();

    for product in &targets.products {
        for competitor in &product.competitors {
            match scrape_competitor(config, client, registry, competitor).await {
                Ok(result) => {
                    tracing::info!(
                        product = %product.product_name,
                        competitor = %competitor.name,
                        raw_price = %result.raw_price,
                        "scraped competitor listing"
                    );
                    scrapes.push(result);
                }
                Err(e) => {
                    tracing::warn!(
                        product = %product.product_name,
                        competitor = %competitor.name,
                        error = %e,
                        "skipping competitor"
                    );
                }
            }
        }
    }

    scrapes
}

/// One fetch+extract attempt. The randomized delay precedes every request,
/// successful or not.
async fn scrape_competitor(
    config: &AppConfig,
    client: &PageClient,
    registry: &ExtractorRegistry,
    competitor: &CompetitorTarget,
) -> Result<ScrapeResult, ScraperError> {
    jittered_delay(config.fetch_delay_min_ms, config.fetch_delay_max_ms).await;

    let profile = registry.profile_for(competitor)?;
    let html = client.fetch_page(&competitor.url).await?;
    let listing = extract_listing(&html, profile)?;

    Ok(ScrapeResult {
        product_name: listing.title,
        competitor: competitor.name.clone(),
        raw_price: listing.raw_price,
        availability: listing.availability,
        timestamp: Utc::now(),
    })
}

/// Normalizes prices and fills the baseline comparison fields.
#[must_use]
pub fn build_records(scrapes: Vec<ScrapeResult>) -> Vec<PriceRecord> {
    let mut records: Vec<PriceRecord> = scrapes
        .into_iter()
        .map(|scrape| {
            let price = pricewatch_scraper::normalize_price(Some(&scrape.raw_price));
            PriceRecord::from_scrape(scrape, price)
        })
        .collect();

    let mut provider = SimulatedHistory::new();
    apply_history(&mut records, &mut provider);
    records
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
