use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CALLBACK_DELAY_MS, DEFAULT_HOME_ROUTE,
    DEFAULT_LOGIN_ROUTE, MAX_CALLBACK_DELAY_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Third-party sign-in callback settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    /// Delay before the provider session is read after landing on the callback route
    pub callback_delay_ms: u64,
    pub login_route: String,
    pub home_route: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            callback_delay_ms: DEFAULT_CALLBACK_DELAY_MS,
            login_route: String::from(DEFAULT_LOGIN_ROUTE),
            home_route: String::from(DEFAULT_HOME_ROUTE),
        }
    }
}

impl OAuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.callback_delay_ms > MAX_CALLBACK_DELAY_MS {
            return Err(ConfigError::oauth(format!(
                "oauth.callback_delay_ms must be <= {}, got {}",
                MAX_CALLBACK_DELAY_MS, self.callback_delay_ms
            )));
        }

        for (name, route) in [
            ("oauth.login_route", &self.login_route),
            ("oauth.home_route", &self.home_route),
        ] {
            if !route.starts_with('/') || route.starts_with("//") || route.contains('?') {
                return Err(ConfigError::oauth(format!(
                    "{name} must be a site-relative path without a query, got '{route}'"
                )));
            }
        }

        Ok(())
    }

    pub fn callback_delay(&self) -> Duration {
        Duration::from_millis(self.callback_delay_ms)
    }
}
