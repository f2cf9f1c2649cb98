use crate::{AuthUser, SessionFailure};

/// Lifecycle of the locally authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No credential; the identity endpoint is never called.
    #[default]
    Anonymous,
    /// Credential present, identity fetch in flight.
    Loading,
    Authenticated(AuthUser),
    Errored(SessionFailure),
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
