use crate::{AuthUser, Credential};

#[test]
fn given_credential_when_debug_formatted_then_token_not_shown() {
    let credential = Credential::new("super-secret-token");

    let debug = format!("{credential:?}");

    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("18 chars"));
}

#[test]
fn given_credential_when_exposed_then_returns_raw_token() {
    let credential = Credential::from("tok-A");
    assert_eq!(credential.expose(), "tok-A");
}

#[test]
fn given_auth_user_json_when_deserialized_then_camel_case_fields_map() {
    let user: AuthUser = serde_json::from_str(
        r#"{"id":1,"email":"a@x.com","firstName":"A","lastName":"B","emailVerified":true}"#,
    )
    .unwrap();

    assert_eq!(
        user,
        AuthUser {
            id: 1,
            email: "a@x.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email_verified: true,
        }
    );
    assert_eq!(user.display_name(), "A B");
}

#[test]
fn given_blank_names_when_display_name_then_falls_back_to_email() {
    let user = AuthUser {
        id: 7,
        email: "seeker@x.com".to_string(),
        first_name: " ".to_string(),
        last_name: String::new(),
        email_verified: false,
    };

    assert_eq!(user.display_name(), "seeker@x.com");
}
