//! Profile editing form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::{FormError, ModalForm, optional};
use crate::types::User;

/// Editable profile fields, pre-filled from the user they were built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub phone: String,
    user: Option<User>,
}

impl ProfileForm {
    /// Pre-fills from `user`; absent fields become empty strings.
    pub fn from_user(user: Option<&User>) -> Self {
        let field = |value: Option<&String>| value.cloned().unwrap_or_default();
        Self {
            first_name: field(user.and_then(|u| u.first_name.as_ref())),
            last_name: field(user.and_then(|u| u.last_name.as_ref())),
            middle_name: field(user.and_then(|u| u.middle_name.as_ref())),
            phone: field(user.and_then(|u| u.phone.as_ref())),
            user: user.cloned(),
        }
    }

    /// The user this form edits.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Edited profile fields; blank fields are cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    /// `user` with the edited fields; `id`, `email` and avatar are kept.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            middle_name: self.middle_name.clone(),
            phone: self.phone.clone(),
            ..user.clone()
        }
    }
}

impl ModalForm for ProfileForm {
    type Output = User;

    fn validate(&self) -> Result<User, FormError> {
        let user = self.user.as_ref().ok_or(FormError::NoUser)?;
        let update = ProfileUpdate {
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
            middle_name: optional(&self.middle_name),
            phone: optional(&self.phone),
        };
        Ok(update.apply_to(user))
    }
}
