use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("YCP_API_BASE_URL")?;

    let env = parse_environment(&or_default("YCP_ENV", "development"));
    let log_level = or_default("YCP_LOG_LEVEL", "info");
    let api_token = lookup("YCP_API_TOKEN").ok();
    let api_user_agent = or_default("YCP_API_USER_AGENT", "ycp/0.1 (coupon-client)");
    let api_request_timeout_secs = parse_u64("YCP_API_TIMEOUT_SECS", "30")?;
    let api_max_retries = parse_u32("YCP_API_MAX_RETRIES", "3")?;
    let api_retry_backoff_base_ms = parse_u64("YCP_API_RETRY_BACKOFF_BASE_MS", "500")?;
    let categories_path = PathBuf::from(or_default(
        "YCP_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        api_token,
        api_user_agent,
        api_request_timeout_secs,
        api_max_retries,
        api_retry_backoff_base_ms,
        categories_path,
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
