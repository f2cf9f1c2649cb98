pub(crate) mod file_token_store;
pub(crate) mod memory_token_store;

pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;

use crate::{AuthResult, Credential};

/// Durable holder for a single bearer token.
///
/// Synchronous and network free. The token shape is never validated here;
/// the server decides whether a token is any good.
pub trait TokenStore: Send + Sync {
    /// `None` is the canonical "logged out" signal.
    fn get(&self) -> AuthResult<Option<Credential>>;

    fn set(&self, credential: &Credential) -> AuthResult<()>;

    /// Removing an absent token succeeds.
    fn clear(&self) -> AuthResult<()>;
}
