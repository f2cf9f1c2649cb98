use crate::SessionFileProvider;

use sj_auth::ThirdPartySessionProvider;

use tempfile::TempDir;

#[tokio::test]
async fn given_lookup_with_session_when_read_then_session_returned() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lookup.json");
    std::fs::write(
        &path,
        r#"{ "session": { "user": { "id": "g-7", "email": "g@x.com" } }, "error": null }"#,
    )
    .unwrap();

    let lookup = SessionFileProvider::new(&path).get_session().await.unwrap();

    assert!(lookup.error.is_none());
    assert_eq!(
        lookup.session.as_ref().and_then(|s| s.email()),
        Some("g@x.com")
    );
}

#[tokio::test]
async fn given_lookup_with_error_when_read_then_error_returned() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lookup.json");
    std::fs::write(&path, r#"{ "error": { "message": "denied", "code": "403" } }"#).unwrap();

    let lookup = SessionFileProvider::new(&path).get_session().await.unwrap();

    assert!(lookup.session.is_none());
    let error = lookup.error.unwrap();
    assert_eq!(error.message, "denied");
    assert_eq!(error.code.as_deref(), Some("403"));
}

#[tokio::test]
async fn given_missing_file_when_read_then_lookup_fails() {
    let temp = TempDir::new().unwrap();
    let provider = SessionFileProvider::new(temp.path().join("absent.json"));

    let result = provider.get_session().await;

    assert!(matches!(result, Err(sj_auth::AuthError::Lookup { .. })));
}

#[tokio::test]
async fn given_malformed_file_when_read_then_lookup_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lookup.json");
    std::fs::write(&path, "not json").unwrap();

    let result = SessionFileProvider::new(&path).get_session().await;

    assert!(result.is_err());
}
