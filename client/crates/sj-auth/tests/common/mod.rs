#![allow(dead_code)]

use sj_auth::{
    AuthClient, AuthError, AuthResult, CredentialStore, MemoryTokenStore, NavigationMode,
    Navigator, Route, SessionLookup, SessionQuery, ThirdPartySessionProvider,
};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

pub fn alice() -> Value {
    json!({
        "id": 1,
        "email": "a@x.com",
        "firstName": "A",
        "lastName": "B",
        "emailVerified": true
    })
}

pub fn credentials(token: Option<&str>) -> CredentialStore {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    CredentialStore::new(Arc::new(store)).unwrap()
}

pub fn client(base_url: &str, token: Option<&str>) -> Arc<AuthClient> {
    Arc::new(AuthClient::new(base_url, credentials(token)))
}

/// Wait (bounded) until the predicate holds for the query.
pub async fn wait_until(query: &SessionQuery, pred: impl Fn(&SessionQuery) -> bool) {
    let mut rx = query.subscribe();
    tokio::time::timeout(Duration::from_secs(5), async {
        while !pred(query) {
            rx.changed().await.unwrap();
        }
    })
    .await
    .expect("session query did not reach the expected state");
}

/// Navigator that remembers every navigation.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(String, NavigationMode)>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visits(&self) -> Vec<(String, NavigationMode)> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route, mode: NavigationMode) {
        self.visits
            .lock()
            .unwrap()
            .push((route.as_str().to_string(), mode));
    }
}

/// Provider returning a canned `{ session, error }` answer, or failing.
pub struct StubProvider {
    answer: Result<Value, String>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn answering(lookup: Value) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(lookup),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThirdPartySessionProvider for StubProvider {
    async fn get_session(&self) -> AuthResult<SessionLookup> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Ok(lookup) => Ok(serde_json::from_value(lookup.clone())?),
            Err(message) => Err(AuthError::lookup(message.clone())),
        }
    }
}
