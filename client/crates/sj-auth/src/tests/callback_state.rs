use crate::{
    AuthError, CallbackState, ProviderError, SessionLookup, SiteRoutes, ThirdPartySession,
};

use serde_json::json;

fn lookup(value: serde_json::Value) -> SessionLookup {
    serde_json::from_value(value).unwrap()
}

#[test]
fn given_lookup_raised_when_resolved_then_callback_error_to_login() {
    let state = CallbackState::resolve(Err(AuthError::lookup("network down")));

    assert_eq!(state, CallbackState::CallbackError("network down".to_string()));
    assert_eq!(
        state.route(&SiteRoutes::default()).unwrap().as_str(),
        "/login?error=callback_error"
    );
}

#[test]
fn given_provider_error_when_resolved_then_auth_error_to_login() {
    let state = CallbackState::resolve(Ok(lookup(json!({
        "session": null,
        "error": { "message": "access_denied" }
    }))));

    assert!(matches!(
        state,
        CallbackState::AuthError(ProviderError { ref message, .. }) if message == "access_denied"
    ));
    assert_eq!(
        state.route(&SiteRoutes::default()).unwrap().as_str(),
        "/login?error=auth_callback_failed"
    );
}

#[test]
fn given_provider_error_and_session_when_resolved_then_error_wins() {
    let state = CallbackState::resolve(Ok(lookup(json!({
        "session": { "user": { "id": "u-1" } },
        "error": { "message": "state mismatch" }
    }))));

    assert!(matches!(state, CallbackState::AuthError(_)));
}

#[test]
fn given_session_when_resolved_then_success_to_home() {
    let state = CallbackState::resolve(Ok(lookup(json!({
        "session": { "user": { "id": "u-1", "email": "a@x.com" } },
        "error": null
    }))));

    assert_eq!(state.session().and_then(ThirdPartySession::user_id), Some("u-1"));
    assert_eq!(state.route(&SiteRoutes::default()).unwrap().as_str(), "/");
}

#[test]
fn given_no_session_no_error_when_resolved_then_no_session_to_login() {
    let state = CallbackState::resolve(Ok(lookup(json!({ "session": null, "error": null }))));

    assert_eq!(state, CallbackState::NoSession);
    assert_eq!(
        state.route(&SiteRoutes::default()).unwrap().as_str(),
        "/login?error=no_session"
    );
}

#[test]
fn given_pending_when_route_then_none() {
    assert!(!CallbackState::Pending.is_terminal());
    assert!(CallbackState::Pending.route(&SiteRoutes::default()).is_none());
}
