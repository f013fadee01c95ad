use crate::app_config::AppConfig;
use crate::money::MoneyLocale;
use crate::ConfigError;

/// Default root of the public catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://openapi.programming-hero.com/api";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let api_base_url = or_default("GREENEARTH_API_BASE_URL", DEFAULT_API_BASE_URL);
    if api_base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GREENEARTH_API_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let data_dir = PathBuf::from(or_default("GREENEARTH_DATA_DIR", "./.greenearth"));
    let log_level = or_default("GREENEARTH_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("GREENEARTH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GREENEARTH_USER_AGENT", "greenearth/0.1 (storefront)");
    let max_retries = parse_u32("GREENEARTH_MAX_RETRIES", "0")?;
    let retry_backoff_base_secs = parse_u64("GREENEARTH_RETRY_BACKOFF_BASE_SECS", "1")?;
    let money_locale = or_default("GREENEARTH_MONEY_LOCALE", "bn-BD")
        .parse::<MoneyLocale>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "GREENEARTH_MONEY_LOCALE".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        api_base_url,
        data_dir,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        money_locale,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
