//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware widgets to coordinate login
//! redirects and identity-dependent rendering. `loading` is true until the
//! host has resolved whether a persisted session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::services::auth::{Session, User};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, user: None, loading: true }
    }
}

impl AuthState {
    /// Apply a session change (sign-in, refresh, or sign-out) and mark
    /// loading finished.
    pub fn apply_session(&mut self, session: Option<Session>) {
        self.user = session.as_ref().map(|s| s.user.clone());
        self.session = session;
        self.loading = false;
    }

    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Whether a guarded page should redirect to the login screen: auth has
    /// resolved and no user is present.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }

    /// Bearer token for data-API calls, when signed in.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}
