use super::*;

fn user(user_type: Option<UserType>) -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: None,
        user_type,
        profile_completed: false,
        has_password: None,
        photo_url: None,
    }
}

#[test]
fn completed_profile_keeps_existing_role() {
    let done = completed_profile(&user(Some(UserType::Owner)), Some(UserType::Worker)).unwrap();
    assert_eq!(done.user_type, Some(UserType::Owner));
    assert!(done.profile_completed);
    assert_eq!(done.first_name.as_deref(), Some("Ada"));
}

#[test]
fn completed_profile_takes_chosen_role_when_missing() {
    let done = completed_profile(&user(None), Some(UserType::Worker)).unwrap();
    assert_eq!(done.user_type, Some(UserType::Worker));
}

#[test]
fn completed_profile_requires_some_role() {
    assert_eq!(
        completed_profile(&user(None), None),
        Err("Choose whether you are looking for work or hiring.")
    );
}
