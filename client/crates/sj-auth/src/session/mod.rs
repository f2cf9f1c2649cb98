pub(crate) mod session_failure;
pub(crate) mod session_query;
pub(crate) mod session_state;
pub(crate) mod session_subscription;

pub use session_failure::SessionFailure;
pub use session_query::{SessionQuery, SessionSnapshot};
pub use session_state::SessionState;
pub use session_subscription::SessionSubscription;
