//! Identity and session management for the Sacred Journeys site.
//!
//! Two independent ways of signing in feed one "current user":
//! a locally issued bearer token (persisted in a [`TokenStore`], sent by the
//! [`AuthClient`], resolved by the [`SessionQuery`]) and a third-party
//! redirect flow resolved by the [`OAuthCallback`] handler.

pub mod auth_context;
pub mod auth_user;
pub mod client;
pub mod credential;
pub mod credential_store;
pub mod current_user;
pub mod error;
pub mod login;
pub mod logout;
pub mod navigation;
pub mod oauth;
pub mod session;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use auth_context::AuthContext;
pub use auth_user::AuthUser;
pub use client::{AuthClient, AuthOutcome, CredentialEffect, RequestOptions};
pub use credential::Credential;
pub use credential_store::{CredentialStore, CredentialVersion};
pub use current_user::CurrentUser;
pub use error::{AuthError, Result as AuthResult};
pub use login::{LoginRequest, LoginResponse, RegisterRequest};
pub use logout::logout;
pub use navigation::{CallbackErrorCode, NavigationMode, Navigator, Route, SiteRoutes};
pub use oauth::{
    CallbackHandle, CallbackState, OAuthCallback, ProviderError, SessionLookup,
    ThirdPartySession, ThirdPartySessionProvider,
};
pub use session::{
    SessionFailure, SessionQuery, SessionSnapshot, SessionState, SessionSubscription,
};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Every authenticated call must target a route under this prefix.
pub const API_PREFIX: &str = "/api/";
/// Identity endpoint the session query is bound to.
pub const IDENTITY_PATH: &str = "/api/auth/user";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
