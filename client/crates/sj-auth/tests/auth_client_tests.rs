//! Integration tests for the bearer-token client using wiremock mock server

mod common;

use common::{client, credentials};

use sj_auth::{
    AuthClient, AuthError, Credential, CredentialEffect, CredentialStore, FileTokenStore,
    RequestOptions, TokenStore,
};

use std::sync::Arc;

use googletest::prelude::*;
use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn given_stored_token_when_request_then_bearer_header_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/journeys"))
        .and(header("authorization", "Bearer tok-A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "journeys": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let outcome = client
        .authenticated_request("/api/journeys", RequestOptions::default())
        .await;

    assert_eq!(outcome.effect, CredentialEffect::Retain);
    let body = outcome.into_result().unwrap();
    assert!(body["journeys"].is_array());
}

#[tokio::test]
async fn given_no_token_when_request_then_no_authorization_header() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/journeys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), None);
    client
        .authenticated_request("/api/journeys", RequestOptions::get())
        .await
        .into_result()
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_that!(requests, len(eq(1)));
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn given_body_when_request_then_sent_as_json_with_extra_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/meetups/3/rsvp"))
        .and(header("content-type", "application/json"))
        .and(header("x-request-id", "abc"))
        .and(body_json(json!({ "guests": 2 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let options = RequestOptions::post(json!({ "guests": 2 })).with_header(
        HeaderName::from_static("x-request-id"),
        HeaderValue::from_static("abc"),
    );
    let body = client
        .authenticated_request("/api/meetups/3/rsvp", options)
        .await
        .into_result()
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn given_empty_success_body_when_request_then_null() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/testimonials/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let body = client
        .authenticated_request("/api/testimonials/9", RequestOptions::new(Method::DELETE))
        .await
        .into_result()
        .unwrap();

    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn given_401_plain_text_when_request_then_credential_purged_with_synthesized_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let outcome = client
        .authenticated_request("/api/auth/user", RequestOptions::get())
        .await;

    assert_eq!(outcome.effect, CredentialEffect::Purge);
    assert!(!client.credentials().is_present());
    let error = outcome.into_result().unwrap_err();
    assert_that!(error.status(), some(eq(401u16)));
    assert_that!(error.message(), eq("401: Unauthorized"));
}

#[tokio::test]
async fn given_403_json_when_request_then_credential_purged_with_server_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "expired" })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let outcome = client
        .authenticated_request("/api/auth/user", RequestOptions::get())
        .await;

    assert!(outcome.purged_credential());
    assert_eq!(client.credentials().current(), None);
    let error = outcome.into_result().unwrap_err();
    assert!(error.is_credential_rejected());
    assert_that!(error.message(), eq("expired"));
}

#[tokio::test]
async fn given_other_failure_statuses_when_request_then_credential_unchanged() {
    for status in [400u16, 404, 429, 500, 503] {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ashrams"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "message": "nope" })),
            )
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Some("tok-A"));
        let outcome = client
            .authenticated_request("/api/ashrams", RequestOptions::get())
            .await;

        assert_eq!(outcome.effect, CredentialEffect::Retain, "status {status}");
        assert_eq!(
            client.credentials().current(),
            Some(Credential::new("tok-A")),
            "status {status}"
        );
        assert_eq!(outcome.into_result().unwrap_err().status(), Some(status));
    }
}

#[tokio::test]
async fn given_invalid_path_when_request_then_fails_without_network() {
    let mock_server = MockServer::start().await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let outcome = client
        .authenticated_request("/auth/callback", RequestOptions::get())
        .await;

    assert!(matches!(
        outcome.into_result(),
        Err(AuthError::InvalidPath { .. })
    ));
    assert!(client.credentials().is_present());
    assert_that!(mock_server.received_requests().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_unreachable_server_when_request_then_http_error_and_credential_kept() {
    let client = client("http://127.0.0.1:1", Some("tok-A"));

    let outcome = client
        .authenticated_request("/api/sages", RequestOptions::get())
        .await;

    assert_eq!(outcome.effect, CredentialEffect::Retain);
    assert!(matches!(outcome.into_result(), Err(AuthError::Http { .. })));
    assert!(client.credentials().is_present());
}

#[tokio::test]
async fn given_file_store_when_401_then_persisted_token_removed() {
    let temp = tempfile::TempDir::new().unwrap();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let file_store = Arc::new(FileTokenStore::for_origin(temp.path(), &mock_server.uri()).unwrap());
    file_store.set(&Credential::new("tok-A")).unwrap();
    let client = AuthClient::new(
        &mock_server.uri(),
        CredentialStore::new(file_store.clone()).unwrap(),
    );

    let _ = client.fetch_user().await;

    assert_eq!(file_store.get().unwrap(), None);
    assert!(!file_store.path().exists());
}

#[tokio::test]
async fn given_typed_request_when_body_mismatches_then_json_error_and_credential_kept() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "not-a-number" })))
        .mount(&mock_server)
        .await;

    let credentials = credentials(Some("tok-A"));
    let client = AuthClient::new(&mock_server.uri(), credentials.clone());

    let outcome = client.fetch_user().await;

    assert_eq!(outcome.effect, CredentialEffect::Retain);
    assert!(matches!(outcome.into_result(), Err(AuthError::Json { .. })));
    assert!(credentials.is_present());
}

#[tokio::test]
async fn given_stored_token_when_submitted_credentials_rejected_then_token_kept() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), Some("tok-A"));
    let options = RequestOptions::post(json!({ "email": "a@x.com", "password": "bad" }));

    let result = client
        .submit_credentials::<Value>("/api/auth/login", options)
        .await;

    let error = result.unwrap_err();
    assert_that!(error.status(), some(eq(401u16)));
    assert_eq!(
        client.credentials().current(),
        Some(Credential::new("tok-A"))
    );
}

/// Store whose token file cannot be removed.
struct StuckTokenStore;

impl TokenStore for StuckTokenStore {
    fn get(&self) -> sj_auth::AuthResult<Option<Credential>> {
        Ok(Some(Credential::new("tok-A")))
    }

    fn set(&self, _credential: &Credential) -> sj_auth::AuthResult<()> {
        Ok(())
    }

    fn clear(&self) -> sj_auth::AuthResult<()> {
        Err(AuthError::token_store(
            "tokens/stuck.json".into(),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ))
    }
}

#[tokio::test]
async fn given_store_removal_fails_when_401_then_credential_still_purged_in_memory() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let credentials = CredentialStore::new(Arc::new(StuckTokenStore)).unwrap();
    let client = AuthClient::new(&mock_server.uri(), credentials.clone());

    let outcome = client.fetch_user().await;

    assert!(outcome.purged_credential());
    assert_eq!(outcome.into_result().unwrap_err().status(), Some(401));
    assert!(!credentials.is_present());
}
