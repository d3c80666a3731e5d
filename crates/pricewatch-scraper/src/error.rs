use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid CSS selector \"{selector}\" in site profile '{site}'")]
    InvalidSelector { site: String, selector: String },

    #[error("unknown site profile '{site}' for competitor '{competitor}'")]
    UnknownSite { site: String, competitor: String },

    #[error("expected field '{field}' not found on page (selector \"{selector}\")")]
    MissingField { field: String, selector: String },
}
