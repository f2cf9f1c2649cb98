use std::fmt;

use sj_config::OAuthConfig;

/// Machine-readable reason appended to the login route as `?error=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackErrorCode {
    /// The provider reported an error.
    AuthCallbackFailed,
    /// The provider had no session to hand over.
    NoSession,
    /// The provider could not be asked.
    CallbackError,
}

impl CallbackErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthCallbackFailed => "auth_callback_failed",
            Self::NoSession => "no_session",
            Self::CallbackError => "callback_error",
        }
    }
}

impl fmt::Display for CallbackErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site-relative navigation target, query string included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Well-known pages the auth flows send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoutes {
    pub login: String,
    pub home: String,
}

impl Default for SiteRoutes {
    fn default() -> Self {
        Self {
            login: String::from("/login"),
            home: String::from("/"),
        }
    }
}

impl SiteRoutes {
    pub fn from_config(config: &OAuthConfig) -> Self {
        Self {
            login: config.login_route.clone(),
            home: config.home_route.clone(),
        }
    }

    /// Anonymous landing page, also the post sign-in destination.
    pub fn home(&self) -> Route {
        Route::new(self.home.clone())
    }

    pub fn login_error(&self, code: CallbackErrorCode) -> Route {
        Route::new(format!("{}?error={}", self.login, code))
    }
}
