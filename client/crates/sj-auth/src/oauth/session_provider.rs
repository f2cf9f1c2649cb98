use crate::{AuthResult, ThirdPartySession};

use async_trait::async_trait;
use serde::Deserialize;

/// Error object handed back by the provider alongside a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Answer of a single session lookup: `{ session, error }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionLookup {
    pub session: Option<ThirdPartySession>,
    pub error: Option<ProviderError>,
}

impl SessionLookup {
    pub fn with_session(session: ThirdPartySession) -> Self {
        Self {
            session: Some(session),
            error: None,
        }
    }

    pub fn with_error(error: ProviderError) -> Self {
        Self {
            session: None,
            error: Some(error),
        }
    }
}

/// The sign-in provider's own session store.
///
/// `Err` means the lookup itself failed; a provider-side refusal comes back
/// as `Ok` with [`SessionLookup::error`] set.
#[async_trait]
pub trait ThirdPartySessionProvider: Send + Sync {
    async fn get_session(&self) -> AuthResult<SessionLookup>;
}
