use std::cell::{Cell, RefCell};

use super::*;
use crate::forms::submit_modal;

fn user_ab() -> User {
    User {
        first_name: Some("A".to_owned()),
        last_name: Some("B".to_owned()),
        ..User::new(2, "a@b.com")
    }
}

// =============================================================
// Pre-fill
// =============================================================

#[test]
fn from_user_prefills_present_fields_and_blanks_the_rest() {
    let form = ProfileForm::from_user(Some(&user_ab()));
    assert_eq!(form.first_name, "A");
    assert_eq!(form.last_name, "B");
    assert_eq!(form.middle_name, "");
    assert_eq!(form.phone, "");
}

#[test]
fn from_no_user_is_blank_and_cannot_submit() {
    let form = ProfileForm::from_user(None);
    assert_eq!(form, ProfileForm::default());
    assert_eq!(form.validate(), Err(FormError::NoUser));
}

// =============================================================
// Update
// =============================================================

#[test]
fn apply_keeps_identity_fields() {
    let mut user = user_ab();
    user.avatar_url = Some("https://example.com/a.png".to_owned());
    let update = ProfileUpdate {
        first_name: Some("Алексей".to_owned()),
        last_name: None,
        middle_name: Some("Иванович".to_owned()),
        phone: Some("+7 900 111-22-33".to_owned()),
    };
    let updated = update.apply_to(&user);
    assert_eq!(updated.id, 2);
    assert_eq!(updated.email, "a@b.com");
    assert_eq!(updated.avatar_url, user.avatar_url);
    assert_eq!(updated.first_name.as_deref(), Some("Алексей"));
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.middle_name.as_deref(), Some("Иванович"));
}

#[test]
fn validate_trims_and_clears_blank_fields() {
    let mut form = ProfileForm::from_user(Some(&user_ab()));
    form.first_name = "  Анна ".to_owned();
    form.last_name = "   ".to_owned();
    form.phone = "+7 900 000-00-00".to_owned();
    let updated = form.validate().unwrap();
    assert_eq!(updated.first_name.as_deref(), Some("Анна"));
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.phone.as_deref(), Some("+7 900 000-00-00"));
}

#[test]
fn submit_runs_update_once_then_closes() {
    let form = ProfileForm::from_user(Some(&user_ab()));
    let order = RefCell::new(Vec::new());
    submit_modal(
        &form,
        |user| order.borrow_mut().push(format!("update {}", user.email)),
        || order.borrow_mut().push("close".to_owned()),
    )
    .unwrap();
    assert_eq!(*order.borrow(), ["update a@b.com", "close"]);
}

#[test]
fn submit_without_user_keeps_dialog_open() {
    let form = ProfileForm::from_user(None);
    let calls = Cell::new(0);
    let result = submit_modal(&form, |_| calls.set(calls.get() + 1), || calls.set(calls.get() + 1));
    assert_eq!(result, Err(FormError::NoUser));
    assert_eq!(calls.get(), 0);
}
