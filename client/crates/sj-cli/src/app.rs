use crate::{CliError, CliErrorResult, Commands, ConsoleNavigator, SessionFileProvider};

use sj_auth::{AuthContext, CallbackState, FileTokenStore, RegisterRequest, RequestOptions};
use sj_config::Config;

use std::path::Path;
use std::sync::Arc;

use log::debug;
use reqwest::Method;
use serde_json::{Value, json};

/// One `sj` invocation: an auth context over the credential file for the
/// configured origin.
pub struct App {
    context: AuthContext,
    navigator: Arc<ConsoleNavigator>,
}

impl App {
    pub fn new(config: &Config, token_dir: &Path) -> CliErrorResult<Self> {
        let store = FileTokenStore::for_origin(token_dir, &config.api.base_url)?;
        debug!("Credential file: {}", store.path().display());

        let navigator = Arc::new(ConsoleNavigator::new());
        let context = AuthContext::from_config(config, Arc::new(store), navigator.clone())?;

        Ok(Self { context, navigator })
    }

    pub fn context(&self) -> &AuthContext {
        &self.context
    }

    pub fn navigator(&self) -> &ConsoleNavigator {
        &self.navigator
    }

    /// Execute a command, returning the JSON printed on stdout.
    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Login { email, password } => {
                let response = self.context.login(&email, &password).await?;
                Ok(json!({ "signedIn": true, "user": response.user }))
            }
            Commands::Register {
                email,
                password,
                first_name,
                last_name,
            } => {
                let request = RegisterRequest {
                    email,
                    password,
                    first_name,
                    last_name,
                };
                let response = self.context.register(&request).await?;
                Ok(json!({ "signedIn": true, "user": response.user }))
            }
            Commands::Logout => {
                self.context.logout()?;
                Ok(json!({ "signedIn": false, "navigate": self.navigation_target() }))
            }
            Commands::Whoami => {
                let user = self.context.session().refetch().await?;
                Ok(json!({ "signedIn": user.is_some(), "user": user }))
            }
            Commands::Request { path, method, body } => {
                let options = request_options(&method, body.as_deref())?;
                let outcome = self
                    .context
                    .client()
                    .authenticated_request(&path, options)
                    .await;
                Ok(outcome.into_result()?)
            }
            Commands::OauthCallback { lookup } => {
                let provider = Arc::new(SessionFileProvider::new(lookup));
                let state = self.context.complete_oauth_callback(provider).await;
                Ok(json!({
                    "state": callback_state_name(&state),
                    "session": state.session(),
                    "navigate": self.navigation_target(),
                }))
            }
        }
    }

    fn navigation_target(&self) -> Option<String> {
        self.navigator
            .last()
            .map(|(route, _)| route.as_str().to_string())
    }
}

/// Build request options from the `--method` and `--body` flags.
pub(crate) fn request_options(method: &str, body: Option<&str>) -> CliErrorResult<RequestOptions> {
    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| CliError::input(format!("Unknown HTTP method '{method}'")))?;

    let mut options = RequestOptions::new(method);
    if let Some(body) = body {
        let body: Value = serde_json::from_str(body)
            .map_err(|e| CliError::input(format!("--body is not valid JSON: {e}")))?;
        options = options.with_body(body);
    }

    Ok(options)
}

pub(crate) fn callback_state_name(state: &CallbackState) -> &'static str {
    match state {
        CallbackState::Pending => "pending",
        CallbackState::Success(_) => "success",
        CallbackState::AuthError(_) => "auth_error",
        CallbackState::NoSession => "no_session",
        CallbackState::CallbackError(_) => "callback_error",
    }
}
