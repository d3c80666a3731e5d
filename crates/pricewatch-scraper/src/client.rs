use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// HTTP client for competitor listing pages.
///
/// One GET per page, no retries: a failed fetch surfaces as a typed error and
/// the caller decides whether to skip the competitor. Non-200 statuses map to
/// [`ScraperError::NotFound`] (404) or [`ScraperError::UnexpectedStatus`].
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the configured request ceiling and
    /// `User-Agent` header.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one listing page and returns its body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network failure, timeout, or a body that
    ///   cannot be read.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Sleeps for a uniformly random duration in `[min_ms, max_ms]`.
///
/// Inserted before every fetch to make request timing less regular; it has no
/// correctness role. A degenerate window (`max_ms <= min_ms`) sleeps for
/// exactly `min_ms`.
pub async fn jittered_delay(min_ms: u64, max_ms: u64) {
    let wait_ms = if max_ms > min_ms {
        let span = (max_ms - min_ms) as f64;
        min_ms + (rand::random::<f64>() * span) as u64
    } else {
        min_ms
    };
    if wait_ms > 0 {
        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
    }
}
