//! sj-cli library
//!
//! Command dispatch for the `sj` binary, exported for the binary and for
//! integration tests.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod console_navigator;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod session_file_provider;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use console_navigator::ConsoleNavigator;
pub use error::{CliError, Result as CliErrorResult};
pub use logger::initialize as initialize_logger;
pub use session_file_provider::SessionFileProvider;
