use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PRICEWATCH_ENV", "development"));
    let log_level = or_default("PRICEWATCH_LOG_LEVEL", "info");
    let targets_path = PathBuf::from(or_default(
        "PRICEWATCH_TARGETS_PATH",
        "./config/targets.yaml",
    ));
    let report_dir = PathBuf::from(or_default("PRICEWATCH_REPORT_DIR", "./report"));

    let request_timeout_secs = parse_u64("PRICEWATCH_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default(
        "PRICEWATCH_USER_AGENT",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    );
    let fetch_delay_min_ms = parse_u64("PRICEWATCH_FETCH_DELAY_MIN_MS", "1000")?;
    let fetch_delay_max_ms = parse_u64("PRICEWATCH_FETCH_DELAY_MAX_MS", "3000")?;

    if fetch_delay_max_ms < fetch_delay_min_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "PRICEWATCH_FETCH_DELAY_MAX_MS".to_string(),
            reason: format!(
                "must be >= PRICEWATCH_FETCH_DELAY_MIN_MS ({fetch_delay_min_ms})"
            ),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        targets_path,
        report_dir,
        request_timeout_secs,
        user_agent,
        fetch_delay_min_ms,
        fetch_delay_max_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
