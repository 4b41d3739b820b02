//! Authentication provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth modal only knows `AuthService`; it never fabricates users itself.
//! Swapping `MockAuthProvider` for a real backend client means providing a
//! different `AuthService` at the root.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::types::User;

/// What the visitor typed into one of the two auth tabs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Login {
        email: String,
        password: String,
    },
    Register {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    },
}


/// Errors an authentication provider may report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider refused the credentials.
    #[error("учётные данные отклонены: {message}")]
    Rejected { message: String },
}

/// Turns credentials into a signed-in user.
pub trait AuthProvider: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;
}

/// Prototype provider: accepts everything and fabricates the user locally.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockAuthProvider;

impl MockAuthProvider {
    pub const LOGIN_USER_ID: u32 = 1;
    pub const REGISTER_USER_ID: u32 = 2;
}

impl AuthProvider for MockAuthProvider {
    fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let user = match credentials {
            // Password is ignored: there is no credential check.
            Credentials::Login { email, .. } => User {
                first_name: Some("Иван".to_owned()),
                last_name: Some("Петров".to_owned()),
                ..User::new(Self::LOGIN_USER_ID, email.clone())
            },
            Credentials::Register {
                first_name,
                last_name,
                email,
                ..
            } => User {
                first_name: Some(first_name.clone()),
                last_name: Some(last_name.clone()),
                ..User::new(Self::REGISTER_USER_ID, email.clone())
            },
        };
        Ok(user)
    }
}

/// Context handle for the active provider.
#[derive(Clone)]
pub struct AuthService(Arc<dyn AuthProvider>);

impl AuthService {
    pub fn new(provider: impl AuthProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    /// Delegates to the wrapped provider.
    ///
    /// # Errors
    ///
    /// Whatever the provider reports.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.0.authenticate(credentials)
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new(MockAuthProvider)
    }
}
