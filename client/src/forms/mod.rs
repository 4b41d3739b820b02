//! Modal form lifecycle.
//!
//! DESIGN
//! ======
//! Each dialog owns a plain form struct (strings as typed) held in a
//! `RwSignal`. Submitting goes through `submit_modal`: validation first, and
//! only a valid form reaches the parent's submit callback, followed by the
//! close callback. An invalid form invokes neither, so the dialog stays
//! open and shows the error.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod profile;
pub mod property;

use crate::util::auth::AuthError;

/// Why a form could not be submitted. Messages are shown in the dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Заполните поле «{field}»")]
    MissingField { field: &'static str },

    #[error("Поле «{field}» должно быть числом")]
    InvalidNumber { field: &'static str },

    #[error("Введите корректный email")]
    InvalidEmail,

    #[error("Войдите в аккаунт")]
    NoUser,

    #[error("Не удалось войти: {0}")]
    Auth(#[from] AuthError),
}

/// A dialog form that validates into a submission value.
pub trait ModalForm {
    type Output;

    /// # Errors
    ///
    /// The first field that blocks submission.
    fn validate(&self) -> Result<Self::Output, FormError>;
}

/// Validates `form`; on success hands the value to `on_submit` once, then
/// calls `on_close`. On failure neither callback runs.
///
/// # Errors
///
/// The validation error, for display in the still-open dialog.
pub fn submit_modal<F: ModalForm>(
    form: &F,
    on_submit: impl FnOnce(F::Output),
    on_close: impl FnOnce(),
) -> Result<(), FormError> {
    let output = form.validate()?;
    on_submit(output);
    on_close();
    Ok(())
}

/// Trimmed value of a required text field.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField { field });
    }
    Ok(trimmed.to_owned())
}

/// Trimmed value of an optional text field; blank becomes `None`.
pub(crate) fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
