pub(crate) mod callback_handle;
pub(crate) mod callback_state;
pub(crate) mod oauth_callback;
pub(crate) mod session_provider;
pub(crate) mod third_party_session;

pub use callback_handle::CallbackHandle;
pub use callback_state::CallbackState;
pub use oauth_callback::{DEFAULT_CALLBACK_DELAY, OAuthCallback};
pub use session_provider::{ProviderError, SessionLookup, ThirdPartySessionProvider};
pub use third_party_session::ThirdPartySession;
