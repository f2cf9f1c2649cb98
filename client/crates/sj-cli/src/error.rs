use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors surfaced by `sj` commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {source} {location}")]
    Config {
        location: ErrorLocation,
        #[source]
        source: sj_config::ConfigError,
    },

    #[error("{source} {location}")]
    Auth {
        location: ErrorLocation,
        #[source]
        source: sj_auth::AuthError,
    },

    #[error("Invalid input: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        CliError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sj_config::ConfigError> for CliError {
    #[track_caller]
    fn from(err: sj_config::ConfigError) -> Self {
        CliError::Config {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<sj_auth::AuthError> for CliError {
    #[track_caller]
    fn from(err: sj_auth::AuthError) -> Self {
        CliError::Auth {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
