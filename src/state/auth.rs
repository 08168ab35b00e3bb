//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context at the root and kept in
//! lockstep with the session store by a propagator subscription. Route
//! guards and identity-aware components read it instead of touching
//! storage directly, which is what makes login and logout take effect
//! everywhere at once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::Session;

/// Reactive snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|session| session.user_id)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.username.as_str())
    }
}
