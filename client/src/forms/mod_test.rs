use std::cell::RefCell;

use super::*;

struct FixedForm(Result<u32, FormError>);

impl ModalForm for FixedForm {
    type Output = u32;

    fn validate(&self) -> Result<u32, FormError> {
        self.0.clone()
    }
}

#[test]
fn valid_form_submits_once_then_closes() {
    let calls = RefCell::new(Vec::new());
    let result = submit_modal(
        &FixedForm(Ok(7)),
        |value| calls.borrow_mut().push(format!("submit {value}")),
        || calls.borrow_mut().push("close".to_owned()),
    );
    assert_eq!(result, Ok(()));
    assert_eq!(*calls.borrow(), ["submit 7", "close"]);
}

#[test]
fn invalid_form_invokes_nothing() {
    let calls = RefCell::new(Vec::<&str>::new());
    let result = submit_modal(
        &FixedForm(Err(FormError::MissingField { field: "Название" })),
        |_| calls.borrow_mut().push("submit"),
        || calls.borrow_mut().push("close"),
    );
    assert_eq!(result, Err(FormError::MissingField { field: "Название" }));
    assert!(calls.borrow().is_empty());
}

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  Иван ", "Имя"), Ok("Иван".to_owned()));
    assert_eq!(required("   ", "Имя"), Err(FormError::MissingField { field: "Имя" }));
}

#[test]
fn optional_maps_blank_to_none() {
    assert_eq!(optional(" x "), Some("x".to_owned()));
    assert_eq!(optional(""), None);
    assert_eq!(optional(" \t"), None);
}

#[test]
fn error_messages_name_the_field() {
    assert_eq!(
        FormError::MissingField { field: "Цена" }.to_string(),
        "Заполните поле «Цена»"
    );
    assert_eq!(
        FormError::InvalidNumber { field: "Площадь" }.to_string(),
        "Поле «Площадь» должно быть числом"
    );
}
