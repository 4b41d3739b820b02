//! Signed-in visitor for the whole application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the root as `RwSignal<SessionState>`, so the header,
//! pages and modals all see the same user and login survives navigation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::types::User;

/// Current user, if any. Lives only in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Replaces the stored user. Ignored when nobody is signed in.
    pub fn update_user(&mut self, user: User) {
        if self.user.is_some() {
            self.user = Some(user);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
