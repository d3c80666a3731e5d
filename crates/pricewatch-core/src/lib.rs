pub mod app_config;
pub mod config;
pub mod error;
pub mod history;
pub mod records;
pub mod targets;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use history::{apply_history, HistoryProvider, SimulatedHistory};
pub use records::{PriceRecord, ScrapeResult};
pub use targets::{load_targets, CompetitorTarget, ProductTarget, SiteSelectors, TargetsFile};
