use crate::{AuthClient, AuthResult, AuthUser, SessionFailure, SessionState, SessionSubscription};

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

/// Session state tagged with the credential epoch it was computed for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub epoch: u64,
    pub state: SessionState,
}

/// Cached, credential-gated answer to "who is the current user".
///
/// The query only talks to the identity endpoint while a credential is
/// present. Results computed for an older credential are discarded.
/// Failures are not retried; the next fetch happens on a credential change
/// or an explicit [`SessionQuery::refetch`].
pub struct SessionQuery {
    client: Arc<AuthClient>,
    snapshot: watch::Sender<SessionSnapshot>,
}

impl SessionQuery {
    pub fn new(client: Arc<AuthClient>) -> Self {
        let version = client.credentials().version();
        let state = if version.is_present() {
            SessionState::Loading
        } else {
            SessionState::Anonymous
        };
        let (snapshot, _) = watch::channel(SessionSnapshot {
            epoch: version.epoch,
            state,
        });

        Self { client, snapshot }
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    /// Current state, evaluated against the live credential.
    ///
    /// Without a credential this is always `Anonymous`; with a credential
    /// newer than the cached result it is `Loading`.
    pub fn state(&self) -> SessionState {
        let live = self.client.credentials().version();
        if !live.is_present() {
            return SessionState::Anonymous;
        }

        let snapshot = self.snapshot.borrow();
        if snapshot.epoch != live.epoch {
            return SessionState::Loading;
        }
        snapshot.state.clone()
    }

    pub fn user(&self) -> Option<AuthUser> {
        match self.state() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Observe raw snapshots as they are published.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    /// Run the identity fetch for the current credential.
    ///
    /// Returns `Ok(None)` without touching the network when signed out.
    /// The fetch result is returned to the caller even when it no longer
    /// applies to the live credential (e.g. a 403 that just purged it).
    pub async fn refetch(&self) -> AuthResult<Option<AuthUser>> {
        let version = self.client.credentials().version();
        if !version.is_present() {
            self.publish(version.epoch, SessionState::Anonymous);
            return Ok(None);
        }

        self.publish(version.epoch, SessionState::Loading);
        let result = self.client.fetch_user().await.into_result();

        let live = self.client.credentials().version();
        if live.epoch != version.epoch {
            debug!(
                "Discarding identity result for epoch {} (live epoch {})",
                version.epoch, live.epoch
            );
            let state = if live.is_present() {
                SessionState::Loading
            } else {
                SessionState::Anonymous
            };
            // A fetch for the live epoch may already have published its result.
            self.snapshot.send_if_modified(|snapshot| {
                if snapshot.epoch >= live.epoch {
                    return false;
                }
                *snapshot = SessionSnapshot {
                    epoch: live.epoch,
                    state,
                };
                true
            });
            return result.map(Some);
        }

        match result {
            Ok(user) => {
                debug!("Session resolved for user {}", user.id);
                self.publish(version.epoch, SessionState::Authenticated(user.clone()));
                Ok(Some(user))
            }
            Err(e) => {
                self.publish(version.epoch, SessionState::Errored(SessionFailure::from(&e)));
                Err(e)
            }
        }
    }

    /// Re-run the query whenever the credential changes.
    ///
    /// Evaluates once immediately, then once per published change.
    pub fn watch(self: &Arc<Self>) -> SessionSubscription {
        let query = Arc::clone(self);
        let mut changes = self.client.credentials().subscribe();

        SessionSubscription::new(tokio::spawn(async move {
            loop {
                if let Err(e) = query.refetch().await {
                    debug!("Identity fetch failed: {e}");
                }
                if changes.changed().await.is_err() {
                    break;
                }
            }
        }))
    }

    fn publish(&self, epoch: u64, state: SessionState) {
        self.snapshot.send_replace(SessionSnapshot { epoch, state });
    }
}
