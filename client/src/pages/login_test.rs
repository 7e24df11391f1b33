use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "secret1"),
        Ok(("a@b.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret1"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    for email in ["ab.com", "@b.com", "a@b", "a@.com", "a@b.com.", "a@b@c.com", "a b@c.com"] {
        assert_eq!(validate_login_input(email, "secret1"), Err("Enter a valid email address."), "{email}");
    }
}

#[test]
fn validate_login_input_requires_six_char_password() {
    assert_eq!(validate_login_input("a@b.com", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_login_input("a@b.com", "123456").is_ok());
}

#[test]
fn validate_login_input_does_not_trim_password() {
    assert_eq!(
        validate_login_input("a@b.com", " pass word "),
        Ok(("a@b.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_register_input_builds_request() {
    let request = validate_register_input(" Ada ", "Lovelace", "ada@b.com", "secret1", Some(UserType::Worker)).unwrap();
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.last_name, "Lovelace");
    assert_eq!(request.email, "ada@b.com");
    assert_eq!(request.user_type, Some(UserType::Worker));
}

#[test]
fn validate_register_input_requires_names() {
    assert_eq!(
        validate_register_input("", "Lovelace", "ada@b.com", "secret1", None),
        Err("Enter your first and last name.")
    );
    assert_eq!(
        validate_register_input("Ada", "  ", "ada@b.com", "secret1", None),
        Err("Enter your first and last name.")
    );
}

#[test]
fn validate_register_input_applies_credential_rules() {
    assert_eq!(
        validate_register_input("Ada", "Lovelace", "ada", "secret1", None),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_register_input("Ada", "Lovelace", "ada@b.com", "short", None),
        Err("Password must be at least 6 characters.")
    );
}
