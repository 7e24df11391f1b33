use super::*;

fn user(has_password: Option<bool>) -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: None,
        last_name: None,
        user_type: Some(UserType::Worker),
        profile_completed: true,
        has_password,
        photo_url: None,
    }
}

#[test]
fn provider_only_account_sets_password() {
    assert_eq!(password_action(Some(&user(Some(false)))), PasswordAction::Set);
}

#[test]
fn password_account_or_unknown_changes_password() {
    assert_eq!(password_action(Some(&user(Some(true)))), PasswordAction::Change);
    assert_eq!(password_action(Some(&user(None))), PasswordAction::Change);
    assert_eq!(password_action(None), PasswordAction::Change);
}

#[test]
fn role_label_covers_every_role() {
    assert_eq!(role_label(Some(UserType::Worker)), "Worker");
    assert_eq!(role_label(Some(UserType::Owner)), "Property owner");
    assert_eq!(role_label(Some(UserType::Admin)), "Administrator");
    assert_eq!(role_label(None), "Member");
}

#[test]
fn validate_new_password_checks_length_then_match() {
    assert_eq!(validate_new_password("12345", "12345"), Err("Password must be at least 6 characters."));
    assert_eq!(validate_new_password("secret1", "secret2"), Err("Passwords do not match."));
    assert_eq!(validate_new_password("secret1", "secret1"), Ok("secret1".to_owned()));
}
