use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session object owned by the sign-in provider's client library.
///
/// Kept opaque; only "who is the user" is ever read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThirdPartySession(Value);

impl ThirdPartySession {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn user(&self) -> Option<&Value> {
        self.0.get("user").filter(|u| !u.is_null())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user()?.get("id")?.as_str()
    }

    pub fn email(&self) -> Option<&str> {
        self.user()?.get("email")?.as_str()
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}
