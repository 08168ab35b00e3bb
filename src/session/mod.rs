//! Persisted sign-in state shared by every page and component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in state lives in browser storage so it survives reloads and new
//! tabs. All reads and writes go through one process-wide [`SessionHub`];
//! anything that must react to sign-in or sign-out (navbar, route guards,
//! the reactive bridge in `app`) subscribes and runs synchronously, in
//! registration order, after storage has been fully updated. Components
//! never touch `localStorage` directly and never dispatch ad-hoc DOM events.

pub mod hub;
pub mod storage;

pub use hub::{ListenerId, Session, SessionHub};
#[cfg(feature = "hydrate")]
pub use storage::BrowserStorage;
pub use storage::{MemoryStorage, SessionStorage};

thread_local! {
    static HUB: SessionHub = SessionHub::new(default_storage());
}

fn default_storage() -> Box<dyn SessionStorage> {
    #[cfg(feature = "hydrate")]
    {
        Box::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::new(MemoryStorage::default())
    }
}

/// Current session, or `None` when signed out.
pub fn current() -> Option<Session> {
    HUB.with(SessionHub::current)
}

/// Persist `session` and notify subscribers before returning.
pub fn establish(session: &Session) {
    #[cfg(feature = "hydrate")]
    log::info!("session established for {}", session.username);
    HUB.with(|hub| hub.establish(session));
}

/// Forget the persisted session and notify subscribers before returning.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    log::info!("session cleared");
    HUB.with(SessionHub::clear);
}

/// Subscribe to session changes; see [`SessionHub::subscribe`].
pub fn subscribe(listener: impl Fn() + 'static) -> ListenerId {
    HUB.with(|hub| hub.subscribe(listener))
}

/// Remove a subscription created with [`subscribe`].
pub fn unsubscribe(id: ListenerId) {
    HUB.with(|hub| hub.unsubscribe(id));
}
