use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the identity and session layer.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message} {location}")]
    Request {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid API path '{path}': {message} {location}")]
    InvalidPath {
        path: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid API origin '{url}': {message} {location}")]
    InvalidOrigin {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token store error at {path}: {source} {location}")]
    TokenStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    /// The sign-in provider answered, but with an error.
    #[error("Sign-in provider reported an error: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    /// The sign-in provider could not be asked at all.
    #[error("Sign-in session lookup failed: {message} {location}")]
    Lookup {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// HTTP status of a failed request, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the server refused the stored credential (401 or 403).
    pub fn is_credential_rejected(&self) -> bool {
        matches!(self, Self::Request { status: 401 | 403, .. })
    }

    /// Human readable message without the location suffix.
    pub fn message(&self) -> String {
        match self {
            Self::Request { message, .. }
            | Self::Http { message, .. }
            | Self::Json { message, .. }
            | Self::InvalidPath { message, .. }
            | Self::InvalidOrigin { message, .. }
            | Self::Provider { message, .. }
            | Self::Lookup { message, .. } => message.clone(),
            Self::TokenStore { source, .. } => source.to_string(),
        }
    }

    #[track_caller]
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_origin(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOrigin {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token_store(path: PathBuf, source: std::io::Error) -> Self {
        Self::TokenStore {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        AuthError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
