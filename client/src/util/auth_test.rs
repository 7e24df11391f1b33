use super::*;
use worklink::{Operation, SessionAction, User, UserType};

fn signed_in(user_type: Option<UserType>, profile_completed: bool) -> Session {
    let mut session = Session::default();
    session.apply(SessionAction::Pending(Operation::PasswordLogin));
    session.apply(SessionAction::Authenticated {
        op: Operation::PasswordLogin,
        user: User {
            id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
            user_type,
            profile_completed,
            has_password: Some(true),
            photo_url: None,
        },
        token: "tok".to_owned(),
    });
    session
}

#[test]
fn location_with_query_joins_search() {
    assert_eq!(location_with_query("/owner/jobs", "?page=2"), "/owner/jobs?page=2");
    assert_eq!(location_with_query("/owner/jobs", "page=2"), "/owner/jobs?page=2");
    assert_eq!(location_with_query("/owner/jobs", ""), "/owner/jobs");
}

#[test]
fn incomplete_profile_goes_to_wizard_even_with_return_location() {
    let session = signed_in(Some(UserType::Worker), false);
    assert_eq!(post_login_target(&session, Some("/worker/jobs")), "/complete-profile");
}

#[test]
fn remembered_location_wins_for_complete_profile() {
    let session = signed_in(Some(UserType::Owner), true);
    assert_eq!(post_login_target(&session, Some("/owner/jobs?page=2")), "/owner/jobs?page=2");
}

#[test]
fn no_return_location_lands_on_role_dashboard() {
    let session = signed_in(Some(UserType::Owner), true);
    assert_eq!(post_login_target(&session, None), "/owner/dashboard");
    assert_eq!(post_login_target(&signed_in(None, true), None), "/");
}

#[test]
fn login_and_offsite_return_locations_are_ignored() {
    let session = signed_in(Some(UserType::Worker), true);
    assert_eq!(post_login_target(&session, Some("/login")), "/worker/dashboard");
    assert_eq!(post_login_target(&session, Some("//evil.example")), "/worker/dashboard");
    assert_eq!(post_login_target(&session, Some("https://evil.example")), "/worker/dashboard");
}

#[test]
fn home_link_follows_session() {
    assert_eq!(home_link(&Session::default()), "/login");
    assert_eq!(home_link(&signed_in(Some(UserType::Worker), false)), "/complete-profile");
    assert_eq!(home_link(&signed_in(Some(UserType::Owner), true)), "/owner/dashboard");
    assert_eq!(home_link(&signed_in(None, true)), ACCOUNT_PATH);
}

#[test]
fn editing_clears_only_a_surfaced_error() {
    let mut session = Session::default();
    assert!(!error_cleared_by_edit(&session));

    session.apply(SessionAction::Pending(Operation::PasswordLogin));
    session.apply(SessionAction::Rejected {
        op: Operation::PasswordLogin,
        message: "Invalid email or password".to_owned(),
    });
    assert!(error_cleared_by_edit(&session));

    session.apply(SessionAction::ClearError);
    assert!(!error_cleared_by_edit(&session));
}
