use crate::{AuthResult, Credential, TokenStore};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;

/// The credential as seen by observers.
///
/// `epoch` increases on every change so work started under an older
/// credential can tell it has been superseded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialVersion {
    pub epoch: u64,
    pub credential: Option<Credential>,
}

impl CredentialVersion {
    pub fn is_present(&self) -> bool {
        self.credential.is_some()
    }
}

struct Inner {
    store: Arc<dyn TokenStore>,
    tx: watch::Sender<CredentialVersion>,
}

/// Single write path for the credential.
///
/// Every mutation hits the backing [`TokenStore`] first and is then
/// published to subscribers before the call returns, so any read made after
/// a mutation observes it.
#[derive(Clone)]
pub struct CredentialStore {
    inner: Arc<Inner>,
}

impl CredentialStore {
    /// Reads the backing store once to seed the in-memory view.
    pub fn new(store: Arc<dyn TokenStore>) -> AuthResult<Self> {
        let credential = store.get()?;
        let (tx, _) = watch::channel(CredentialVersion {
            epoch: 0,
            credential,
        });

        Ok(Self {
            inner: Arc::new(Inner { store, tx }),
        })
    }

    pub fn current(&self) -> Option<Credential> {
        self.inner.tx.borrow().credential.clone()
    }

    pub fn version(&self) -> CredentialVersion {
        self.inner.tx.borrow().clone()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.tx.borrow().epoch
    }

    pub fn is_present(&self) -> bool {
        self.inner.tx.borrow().is_present()
    }

    /// Register for change notifications.
    pub fn subscribe(&self) -> watch::Receiver<CredentialVersion> {
        self.inner.tx.subscribe()
    }

    pub fn set(&self, credential: Credential) -> AuthResult<()> {
        self.inner.store.set(&credential)?;

        self.inner.tx.send_modify(|version| {
            version.epoch += 1;
            version.credential = Some(credential);
        });

        info!("Credential stored (epoch {})", self.epoch());
        Ok(())
    }

    /// Forget the credential.
    ///
    /// The in-memory view is cleared even when the backing store fails, so
    /// a rejected token is never sent again; the store error is still
    /// returned. Clearing an absent credential publishes nothing.
    pub fn clear(&self) -> AuthResult<()> {
        let persisted = self.inner.store.clear();
        if let Err(ref e) = persisted {
            warn!("Failed to remove persisted credential: {e}");
        }

        let changed = self.inner.tx.send_if_modified(|version| {
            if version.credential.is_none() {
                return false;
            }
            version.epoch += 1;
            version.credential = None;
            true
        });

        if changed {
            info!("Credential cleared (epoch {})", self.epoch());
        }

        persisted
    }
}
