use crate::oauth::DEFAULT_CALLBACK_DELAY;
use crate::{
    AuthClient, AuthError, AuthResult, CallbackState, CredentialStore, CurrentUser, LOGIN_PATH,
    LoginRequest, LoginResponse, Navigator, OAuthCallback, REGISTER_PATH, RegisterRequest,
    RequestOptions, SessionQuery, SessionSubscription, SiteRoutes, ThirdPartySession,
    ThirdPartySessionProvider, TokenStore, logout,
};

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::info;
use reqwest::Method;
use sj_config::Config;

/// Owned session capability handed to everything that needs "who is signed in".
///
/// When both a local session and a third-party session exist, the local one
/// wins: it is the identity the API authorizes requests with. The two are
/// never merged.
pub struct AuthContext {
    client: Arc<AuthClient>,
    session: Arc<SessionQuery>,
    navigator: Arc<dyn Navigator>,
    routes: SiteRoutes,
    callback_delay: Duration,
    third_party: Mutex<Option<ThirdPartySession>>,
}

impl AuthContext {
    pub fn new(client: AuthClient, navigator: Arc<dyn Navigator>) -> Self {
        let client = Arc::new(client);
        let session = Arc::new(SessionQuery::new(Arc::clone(&client)));

        Self {
            client,
            session,
            navigator,
            routes: SiteRoutes::default(),
            callback_delay: DEFAULT_CALLBACK_DELAY,
            third_party: Mutex::new(None),
        }
    }

    /// Build from loaded configuration over the given token store.
    pub fn from_config(
        config: &Config,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> AuthResult<Self> {
        let credentials = CredentialStore::new(store)?;
        let client = AuthClient::from_config(&config.api, credentials)?;

        Ok(Self::new(client, navigator)
            .with_routes(SiteRoutes::from_config(&config.oauth))
            .with_callback_delay(config.oauth.callback_delay()))
    }

    pub fn with_routes(mut self, routes: SiteRoutes) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_callback_delay(mut self, delay: Duration) -> Self {
        self.callback_delay = delay;
        self
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub fn credentials(&self) -> &CredentialStore {
        self.client.credentials()
    }

    pub fn session(&self) -> &Arc<SessionQuery> {
        &self.session
    }

    pub fn routes(&self) -> &SiteRoutes {
        &self.routes
    }

    /// Keep the session query in step with the credential.
    pub fn watch_session(&self) -> SessionSubscription {
        self.session.watch()
    }

    /// Password sign-in; stores the returned credential.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<LoginResponse> {
        let options =
            RequestOptions::new(Method::POST).with_json(&LoginRequest { email, password })?;
        let response = self
            .client
            .submit_credentials::<LoginResponse>(LOGIN_PATH, options)
            .await?;

        self.credentials().set(response.token.clone())?;
        info!("Signed in as {email}");
        Ok(response)
    }

    /// Account creation; stores the returned credential.
    pub async fn register(&self, request: &RegisterRequest) -> AuthResult<LoginResponse> {
        let options = RequestOptions::new(Method::POST).with_json(request)?;
        let response = self
            .client
            .submit_credentials::<LoginResponse>(REGISTER_PATH, options)
            .await?;

        self.credentials().set(response.token.clone())?;
        info!("Registered {}", request.email);
        Ok(response)
    }

    /// Clear the credential and any recorded provider session, then reload
    /// at the landing page.
    pub fn logout(&self) -> AuthResult<()> {
        self.set_third_party(None);
        logout(self.credentials(), self.navigator.as_ref(), &self.routes)
    }

    /// Handler for the provider's redirect page, configured from this context.
    pub fn oauth_callback(&self, provider: Arc<dyn ThirdPartySessionProvider>) -> OAuthCallback {
        OAuthCallback::new(provider, Arc::clone(&self.navigator))
            .with_delay(self.callback_delay)
            .with_routes(self.routes.clone())
    }

    /// Run the redirect page to completion and remember the provider session
    /// on success. Dropping the future unmounts the page.
    pub async fn complete_oauth_callback(
        &self,
        provider: Arc<dyn ThirdPartySessionProvider>,
    ) -> CallbackState {
        let state = self.oauth_callback(provider).mount().finished().await;
        if let Some(session) = state.session() {
            self.set_third_party(Some(session.clone()));
        }
        state
    }

    /// Ask the provider for its current session and remember the answer.
    pub async fn refresh_third_party_session(
        &self,
        provider: &dyn ThirdPartySessionProvider,
    ) -> AuthResult<Option<ThirdPartySession>> {
        let lookup = provider.get_session().await?;
        if let Some(error) = lookup.error {
            self.set_third_party(None);
            return Err(AuthError::provider(error.message));
        }

        self.set_third_party(lookup.session.clone());
        Ok(lookup.session)
    }

    pub fn third_party_session(&self) -> Option<ThirdPartySession> {
        self.third_party
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve the one authoritative identity.
    pub fn current_user(&self) -> CurrentUser {
        if let Some(user) = self.session.user() {
            return CurrentUser::Local(user);
        }

        match self.third_party_session() {
            Some(session) => CurrentUser::ThirdParty(session),
            None => CurrentUser::Anonymous,
        }
    }

    fn set_third_party(&self, session: Option<ThirdPartySession>) {
        *self
            .third_party
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = session;
    }
}
