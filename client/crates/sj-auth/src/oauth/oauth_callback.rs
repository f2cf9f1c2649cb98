use crate::{
    CallbackHandle, CallbackState, NavigationMode, Navigator, SiteRoutes,
    ThirdPartySessionProvider,
};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::sync::watch;

/// Time given to the redirect parameters to settle before the provider
/// library reads them.
pub const DEFAULT_CALLBACK_DELAY: Duration = Duration::from_millis(100);

/// One-shot resolver for the third-party sign-in redirect.
///
/// Never reads or writes the local credential.
pub struct OAuthCallback {
    provider: Arc<dyn ThirdPartySessionProvider>,
    navigator: Arc<dyn Navigator>,
    routes: SiteRoutes,
    delay: Duration,
}

impl OAuthCallback {
    pub fn new(
        provider: Arc<dyn ThirdPartySessionProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            provider,
            navigator,
            routes: SiteRoutes::default(),
            delay: DEFAULT_CALLBACK_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_routes(mut self, routes: SiteRoutes) -> Self {
        self.routes = routes;
        self
    }

    /// Schedule the single delayed lookup. Must be called inside a tokio runtime.
    pub fn mount(self) -> CallbackHandle {
        let (tx, rx) = watch::channel(CallbackState::Pending);
        let Self {
            provider,
            navigator,
            routes,
            delay,
        } = self;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let state = CallbackState::resolve(provider.get_session().await);
            match &state {
                CallbackState::Success(session) => info!(
                    "Third-party sign-in completed for {}",
                    session.user_id().unwrap_or("unknown user")
                ),
                CallbackState::AuthError(error) => {
                    warn!("Sign-in provider reported an error: {}", error.message)
                }
                CallbackState::CallbackError(message) => {
                    warn!("Sign-in session lookup failed: {message}")
                }
                CallbackState::NoSession => warn!("Sign-in callback found no session"),
                CallbackState::Pending => {}
            }

            let route = state.route(&routes);
            tx.send_replace(state);
            if let Some(route) = route {
                navigator.navigate(&route, NavigationMode::Client);
            }
        });

        CallbackHandle::new(rx, task)
    }
}
