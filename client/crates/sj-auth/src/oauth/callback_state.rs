use crate::{
    AuthResult, CallbackErrorCode, ProviderError, Route, SessionLookup, SiteRoutes,
    ThirdPartySession,
};

/// Progress of the sign-in callback page. Every state but `Pending` is
/// terminal and maps to exactly one navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackState {
    Pending,
    Success(ThirdPartySession),
    /// The provider answered with an error.
    AuthError(ProviderError),
    NoSession,
    /// The lookup call itself failed.
    CallbackError(String),
}

impl CallbackState {
    /// Transition out of `Pending` for a finished lookup.
    ///
    /// A provider error wins over a session returned in the same answer.
    pub fn resolve(lookup: AuthResult<SessionLookup>) -> Self {
        match lookup {
            Err(e) => Self::CallbackError(e.message()),
            Ok(SessionLookup {
                error: Some(error), ..
            }) => Self::AuthError(error),
            Ok(SessionLookup {
                session: Some(session),
                ..
            }) => Self::Success(session),
            Ok(_) => Self::NoSession,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Where a terminal state sends the user.
    pub fn route(&self, routes: &SiteRoutes) -> Option<Route> {
        match self {
            Self::Pending => None,
            Self::Success(_) => Some(routes.home()),
            Self::AuthError(_) => Some(routes.login_error(CallbackErrorCode::AuthCallbackFailed)),
            Self::NoSession => Some(routes.login_error(CallbackErrorCode::NoSession)),
            Self::CallbackError(_) => Some(routes.login_error(CallbackErrorCode::CallbackError)),
        }
    }

    pub fn session(&self) -> Option<&ThirdPartySession> {
        match self {
            Self::Success(session) => Some(session),
            _ => None,
        }
    }
}
