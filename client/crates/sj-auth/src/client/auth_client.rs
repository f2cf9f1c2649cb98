use crate::{
    API_PREFIX, AuthError, AuthOutcome, AuthResult, AuthUser, CredentialEffect, CredentialStore,
    IDENTITY_PATH, RequestOptions,
};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sj_config::ApiConfig;

/// HTTP client for the site API that carries the stored bearer token.
pub struct AuthClient {
    base_url: String,
    credentials: CredentialStore,
    client: ReqwestClient,
}

impl AuthClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API origin (e.g., "http://127.0.0.1:8000")
    /// * `credentials` - Where the bearer token lives
    pub fn new(base_url: &str, credentials: CredentialStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client: ReqwestClient::new(),
        }
    }

    /// Client with a per-request timeout.
    #[track_caller]
    pub fn with_timeout(
        base_url: &str,
        credentials: CredentialStore,
        timeout: Duration,
    ) -> AuthResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(AuthError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    pub fn from_config(config: &ApiConfig, credentials: CredentialStore) -> AuthResult<Self> {
        Self::with_timeout(&config.base_url, credentials, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Send a request to a same-origin API route.
    ///
    /// A 401 or 403 answer purges the stored credential before this returns;
    /// the returned outcome declares it as [`CredentialEffect::Purge`].
    pub async fn authenticated_request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> AuthOutcome<Value> {
        let outcome = AuthOutcome::from_result(self.execute(path, options, true).await);
        self.apply(&outcome);
        outcome
    }

    /// [`Self::authenticated_request`] with the body deserialized into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> AuthOutcome<T> {
        self.authenticated_request(path, options)
            .await
            .and_then(|body| serde_json::from_value(body).map_err(AuthError::from_json))
    }

    /// Send credentials (email and password) to an endpoint that issues a
    /// token.
    ///
    /// The stored credential is neither sent nor purged: a 401 here means the
    /// submitted password was wrong, not that the stored token was rejected.
    pub async fn submit_credentials<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> AuthResult<T> {
        let body = self.execute(path, options, false).await?;
        serde_json::from_value(body).map_err(AuthError::from_json)
    }

    /// Fetch the identity behind the stored credential.
    pub async fn fetch_user(&self) -> AuthOutcome<AuthUser> {
        self.request_json(IDENTITY_PATH, RequestOptions::get()).await
    }

    fn apply<T>(&self, outcome: &AuthOutcome<T>) {
        if outcome.effect != CredentialEffect::Purge {
            return;
        }

        if let Err(ref e) = outcome.result {
            warn!(
                "Credential rejected (status {}), signing out",
                e.status().unwrap_or_default()
            );
        }

        // The in-memory credential is gone even if the store write failed.
        if let Err(e) = self.credentials.clear() {
            debug!("Purged credential could not be removed from the store: {e}");
        }
    }

    async fn execute(
        &self,
        path: &str,
        options: RequestOptions,
        send_credential: bool,
    ) -> AuthResult<Value> {
        validate_api_path(path)?;

        let RequestOptions {
            method,
            body,
            headers,
        } = options;

        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {path}");

        let mut req = self.client.request(method, &url);

        if let Some(credential) = self.credentials.current().filter(|_| send_credential) {
            req = req.bearer_auth(credential.expose());
        }

        if let Some(ref body) = body {
            req = req.json(body);
        }

        let response = req.headers(headers).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = failure_message(status, &bytes);
            debug!("{path} failed: {status}");
            return Err(AuthError::request(status.as_u16(), message));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Only site-relative routes under the API prefix may carry the token.
#[track_caller]
pub(crate) fn validate_api_path(path: &str) -> AuthResult<()> {
    if !path.starts_with(API_PREFIX) {
        return Err(AuthError::invalid_path(
            path,
            format!("must start with '{API_PREFIX}'"),
        ));
    }

    if path.contains("://") || path.contains('\\') {
        return Err(AuthError::invalid_path(path, "must be same-origin"));
    }

    Ok(())
}

/// Server-supplied `message` when the body is JSON carrying one,
/// otherwise "<status>: <reason>".
pub(crate) fn failure_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| {
            format!(
                "{}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        })
}
