pub(crate) mod auth_client;
pub(crate) mod auth_outcome;
pub(crate) mod request_options;

pub use auth_client::AuthClient;
pub use auth_outcome::{AuthOutcome, CredentialEffect};
pub use request_options::RequestOptions;
