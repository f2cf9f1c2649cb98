use crate::{AuthError, AuthResult};

/// What a finished request means for the stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialEffect {
    Retain,
    /// The server rejected the credential (401/403); it must be forgotten.
    Purge,
}

impl CredentialEffect {
    pub fn for_error(error: &AuthError) -> Self {
        if error.is_credential_rejected() {
            Self::Purge
        } else {
            Self::Retain
        }
    }
}

/// Result of an authenticated request together with the credential
/// transition it caused.
#[derive(Debug)]
#[must_use]
pub struct AuthOutcome<T> {
    pub result: AuthResult<T>,
    pub effect: CredentialEffect,
}

impl<T> AuthOutcome<T> {
    pub fn from_result(result: AuthResult<T>) -> Self {
        let effect = match &result {
            Ok(_) => CredentialEffect::Retain,
            Err(e) => CredentialEffect::for_error(e),
        };
        Self { result, effect }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn purged_credential(&self) -> bool {
        self.effect == CredentialEffect::Purge
    }

    /// Map the success value; the effect is unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AuthOutcome<U> {
        AuthOutcome {
            result: self.result.map(f),
            effect: self.effect,
        }
    }

    /// Chain a fallible conversion of the success value; the effect is unchanged.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> AuthResult<U>) -> AuthOutcome<U> {
        AuthOutcome {
            result: self.result.and_then(f),
            effect: self.effect,
        }
    }

    pub fn into_result(self) -> AuthResult<T> {
        self.result
    }
}
