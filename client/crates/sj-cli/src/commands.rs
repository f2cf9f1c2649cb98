use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },

    /// Forget the stored credential
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Send an authenticated request to an API route
    Request {
        /// Site-relative route, e.g. /api/journeys
        path: String,
        #[arg(long, default_value = "GET")]
        method: String,
        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },

    /// Resolve a third-party sign-in redirect from a recorded provider lookup
    OauthCallback {
        /// JSON file holding `{ "session": ..., "error": ... }`
        #[arg(long)]
        lookup: PathBuf,
    },
}
