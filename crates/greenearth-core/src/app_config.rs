use std::path::PathBuf;

use crate::money::MoneyLocale;

/// Runtime configuration for the storefront, resolved from environment
/// variables by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the remote catalog API, without a trailing slash requirement.
    pub api_base_url: String,
    /// Directory holding the persisted cart.
    pub data_dir: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after a transport failure. `0` means one attempt.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub money_locale: MoneyLocale,
}
