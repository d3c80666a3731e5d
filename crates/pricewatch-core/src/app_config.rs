use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Whether log output should use ANSI colors. Production logs usually go
    /// to a collector rather than a terminal, so colors are disabled there.
    #[must_use]
    pub fn ansi_logs(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for a single monitoring run.
///
/// Built from environment variables by [`crate::config::load_app_config`] and
/// passed explicitly into the pipeline entry point. There is no ambient
/// global configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Path to the YAML file listing products and their competitor URLs.
    pub targets_path: PathBuf,
    /// Directory the spreadsheet report is written into. Created on demand.
    pub report_dir: PathBuf,
    /// Per-request ceiling for each competitor fetch.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every fetch. Defaults to a generic
    /// browser string so listing pages serve their normal markup.
    pub user_agent: String,
    /// Lower bound of the randomized pre-request delay window.
    pub fetch_delay_min_ms: u64,
    /// Upper bound of the randomized pre-request delay window.
    pub fetch_delay_max_ms: u64,
}
