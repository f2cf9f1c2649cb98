use crate::{AuthUser, ThirdPartySession};

/// The single identity the UI treats as signed in.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentUser {
    Anonymous,
    /// Resolved from the local bearer token.
    Local(AuthUser),
    /// Resolved from the sign-in provider's session.
    ThirdParty(ThirdPartySession),
}

impl CurrentUser {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Local(user) => Some(&user.email),
            Self::ThirdParty(session) => session.email(),
        }
    }
}
