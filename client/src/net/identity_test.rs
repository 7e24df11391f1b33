use super::*;

#[test]
fn request_json_carries_scopes_and_prompt() {
    let raw = request_json(&ProviderRequest::default());
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["scopes"], serde_json::json!(["email", "profile"]));
    assert_eq!(value["prompt"], "select_account");
}

#[test]
fn parse_identity_reads_shim_object() {
    let raw = r#"{"uid":"g-1","email":"g@x.io","displayName":"Grace Hopper","photoURL":null,"emailVerified":true,"idToken":"jwt"}"#;
    let identity = parse_identity(raw).unwrap().unwrap();
    assert_eq!(identity.provider_uid, "g-1");
    assert_eq!(identity.display_name.as_deref(), Some("Grace Hopper"));
    assert!(identity.email_verified);
    assert_eq!(identity.id_token.as_deref(), Some("jwt"));
}

#[test]
fn parse_identity_null_is_none() {
    assert_eq!(parse_identity("null"), Ok(None));
}

#[test]
fn parse_identity_garbage_is_error() {
    assert!(matches!(parse_identity("42"), Err(ProviderError::Other(_))));
}

#[test]
fn parse_failure_maps_known_codes() {
    assert_eq!(
        parse_failure(r#"{"code":"auth/popup-blocked","message":"Firebase: Error (auth/popup-blocked)."}"#),
        ProviderError::PopupBlocked
    );
    assert_eq!(parse_failure(r#"{"code":"auth/popup-closed-by-user"}"#), ProviderError::PopupClosed);
}

#[test]
fn parse_failure_keeps_unknown_message() {
    assert_eq!(
        parse_failure(r#"{"code":"worklink/not-configured","message":"Identity provider is not configured."}"#),
        ProviderError::Other("Identity provider is not configured.".to_owned())
    );
}

#[test]
fn parse_failure_detects_cross_origin_warning() {
    let err = parse_failure(r#"{"code":"unknown","message":"Cross-Origin-Opener-Policy policy would block the window.closed call."}"#);
    assert!(err.is_benign());
}

#[test]
fn parse_failure_of_bare_string() {
    assert_eq!(parse_failure(r#""boom""#), ProviderError::Other("boom".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn native_build_has_no_provider() {
    let provider = FirebaseProvider::new();
    assert_eq!(
        provider.sign_in_popup(&ProviderRequest::default()).await,
        Err(ProviderError::Unavailable)
    );
    assert_eq!(provider.redirect_result().await, Ok(None));
    assert_eq!(provider.sign_out().await, Ok(()));
}
