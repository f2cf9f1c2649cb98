//! sj - Sacred Journeys account and session client
//!
//! Signs in against the site's API, keeps the bearer token in the config
//! directory and sends authenticated requests with it.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and show the account
//! sj login --email a@x.com --password secret
//! sj whoami --pretty
//!
//! # Call an API route with the stored token
//! sj request /api/journeys
//! sj request /api/meetups/3/rsvp --method post --body '{"guests":2}'
//!
//! # Sign out
//! sj logout
//! ```

use sj_cli::{App, Cli, CliErrorResult, initialize_logger};
use sj_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    initialize_logger(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::new(&config, &config.token_store_path()?)?;
    app.run(cli.command).await
}
