//! Route guards for signed-in-only pages.
//!
//! DESIGN
//! ======
//! Guards subscribe to the session rather than checking it once at mount.
//! The root component keeps an [`AuthState`] context in lockstep with the
//! session store, so a logout (voluntary or forced by a rejected token) in
//! any corner of the app moves every guarded page to the login screen while
//! it is still on screen, not on its next visit.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[cfg(any(test, feature = "hydrate"))]
use crate::session::Session;

/// Whether a guarded page must bounce to the login screen.
///
/// Takes both the reactive snapshot and a fresh read of the store so a
/// guard mounted before the root's first sync cannot evict a signed-in tab.
#[cfg(any(test, feature = "hydrate"))]
fn needs_login(context: Option<&Session>, stored: Option<&Session>) -> bool {
    context.is_none() && stored.is_none()
}

/// Hard navigation to the login screen.
///
/// Deliberately not router-based: this is called from deep inside async
/// response handling where no router handle is in scope, and a full page
/// load gives the next page a clean slate.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Guard the current page behind a session.
///
/// Returns the live [`AuthState`] signal and installs an effect that
/// redirects to the login screen the moment the session goes away.
pub fn require_session() -> RwSignal<AuthState> {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let context_session = auth.with(|state| state.session.clone());
        if needs_login(context_session.as_ref(), crate::session::current().as_ref()) {
            redirect_to_login();
        }
    });
    auth
}
