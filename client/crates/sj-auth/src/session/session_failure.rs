use crate::AuthError;

/// Why the last identity fetch failed, kept in session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl From<&AuthError> for SessionFailure {
    fn from(error: &AuthError) -> Self {
        Self {
            status: error.status(),
            message: error.message(),
        }
    }
}
