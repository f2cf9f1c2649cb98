use sj_auth::{AuthError, AuthResult, SessionLookup, ThirdPartySessionProvider};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

/// Provider whose session store is a JSON file in the
/// `{ "session": ..., "error": ... }` shape.
pub struct SessionFileProvider {
    path: PathBuf,
}

impl SessionFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ThirdPartySessionProvider for SessionFileProvider {
    async fn get_session(&self) -> AuthResult<SessionLookup> {
        debug!("Reading provider session from {}", self.path.display());

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AuthError::lookup(format!("Cannot read {}: {e}", self.path.display()))
        })?;

        Ok(serde_json::from_str(&contents)?)
    }
}
