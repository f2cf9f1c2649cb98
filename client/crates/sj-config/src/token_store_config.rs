use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_STORE_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TokenStoreConfig {
    /// Directory (relative to the config dir) holding one token file per origin
    pub dir: String,
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_TOKEN_STORE_DIR),
        }
    }
}

impl TokenStoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::token_store("token_store.dir cannot be empty"));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::token_store(
                "token_store.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
