mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod oauth_config;
mod token_store_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use oauth_config::OAuthConfig;
pub use token_store_config::TokenStoreConfig;

const DEFAULT_CONFIG_DIR: &str = ".sj";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_TOKEN_STORE_DIR: &str = "tokens";

const DEFAULT_CALLBACK_DELAY_MS: u64 = 100;
const MAX_CALLBACK_DELAY_MS: u64 = 5_000;
const DEFAULT_LOGIN_ROUTE: &str = "/login";
const DEFAULT_HOME_ROUTE: &str = "/";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
