use crate::{AuthUser, Credential};

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Answer of login and registration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: Credential,
    /// Some servers echo the user; the session query refetches it regardless.
    #[serde(default)]
    pub user: Option<AuthUser>,
}
