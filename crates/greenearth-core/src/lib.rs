pub mod app_config;
pub mod catalog;
pub mod config;
pub mod money;

pub use app_config::AppConfig;
pub use catalog::{CartEntry, Category, Plant, ALL_CATEGORY_ID, ALL_CATEGORY_NAME};
pub use config::{load_app_config, load_app_config_from_env};
pub use money::{format_money, MoneyLocale, CURRENCY_GLYPH};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
