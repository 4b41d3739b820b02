use super::*;

fn user() -> User {
    let mut user = User::new(1, "ivan@example.com");
    user.first_name = Some("Иван".to_owned());
    user
}

#[test]
fn default_session_is_anonymous() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert!(session.user.is_none());
}

#[test]
fn login_then_logout() {
    let mut session = SessionState::default();
    session.login(user());
    assert!(session.is_authenticated());
    assert_eq!(session.user.as_ref().map(|u| u.id), Some(1));

    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn update_user_replaces_signed_in_user() {
    let mut session = SessionState::default();
    session.login(user());
    let mut edited = user();
    edited.phone = Some("+7 900 000-00-00".to_owned());
    session.update_user(edited.clone());
    assert_eq!(session.user, Some(edited));
}

#[test]
fn update_user_without_session_is_ignored() {
    let mut session = SessionState::default();
    session.update_user(user());
    assert!(session.user.is_none());
}
