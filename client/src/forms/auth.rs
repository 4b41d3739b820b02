//! Login and registration forms.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::{FormError, ModalForm, required};
use crate::types::User;
use crate::util::auth::{AuthService, Credentials};

/// Which tab of the auth dialog is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Вход",
            Self::Register => "Регистрация",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl ModalForm for LoginForm {
    type Output = Credentials;

    fn validate(&self) -> Result<Credentials, FormError> {
        Ok(Credentials::Login {
            email: email(&self.email)?,
            password: required(&self.password, "Пароль")?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl ModalForm for RegisterForm {
    type Output = Credentials;

    fn validate(&self) -> Result<Credentials, FormError> {
        Ok(Credentials::Register {
            first_name: required(&self.first_name, "Имя")?,
            last_name: required(&self.last_name, "Фамилия")?,
            email: email(&self.email)?,
            password: required(&self.password, "Пароль")?,
        })
    }
}

/// Both tabs' fields; only the active tab is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub login: LoginForm,
    pub register: RegisterForm,
}

impl ModalForm for AuthForm {
    type Output = Credentials;

    fn validate(&self) -> Result<Credentials, FormError> {
        match self.tab {
            AuthTab::Login => self.login.validate(),
            AuthTab::Register => self.register.validate(),
        }
    }
}

/// An auth form paired with the provider that turns it into a user.
pub struct AuthAttempt<'a> {
    pub form: &'a AuthForm,
    pub service: &'a AuthService,
}

impl ModalForm for AuthAttempt<'_> {
    type Output = User;

    fn validate(&self) -> Result<User, FormError> {
        let credentials = self.form.validate()?;
        Ok(self.service.authenticate(&credentials)?)
    }
}

fn email(value: &str) -> Result<String, FormError> {
    let email = required(value, "Email")?;
    if !email.contains('@') {
        return Err(FormError::InvalidEmail);
    }
    Ok(email)
}
