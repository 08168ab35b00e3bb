//! The session propagator: persisted sign-in state with synchronous fan-out.
//!
//! ARCHITECTURE
//! ============
//! Sign-in state is three storage keys (`token`, `userId`, `username`) plus a
//! registry of change listeners. All mutation goes through [`SessionHub`], so
//! every interested party (navbar, route guards, the reactive bridge) sees
//! the same ordering: storage is fully updated first, then listeners run
//! synchronously in registration order. By the time a mutating call returns,
//! every listener has already observed the new state.
//!
//! DESIGN
//! ======
//! Listener bookkeeping favors predictability over throughput; registries
//! here hold a handful of entries, never thousands. Dispatch walks a
//! snapshot taken at notify time: listeners added mid-dispatch wait for the
//! next change, and listeners removed mid-dispatch are skipped via a
//! liveness check against the registry. No `RefCell` borrow is held while a
//! listener runs, so a listener may itself mutate the session or the
//! registry without tripping a borrow panic.
//!
//! ERROR HANDLING
//! ==============
//! Reads are total: anything short of a complete, parseable record (a torn
//! write from a crashed page load, a missing key, a non-numeric user id)
//! reads as signed out rather than erroring.

#[cfg(test)]
#[path = "hub_test.rs"]
mod hub_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::storage::SessionStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the numeric user id.
pub const USER_ID_KEY: &str = "userId";
/// Storage key for the display name.
pub const USERNAME_KEY: &str = "username";

/// A signed-in user's credentials as persisted in browser storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to authenticated API requests.
    pub token: String,
    /// Numeric user id, used for profile routes and ownership checks.
    pub user_id: i64,
    /// Display name shown in the navbar.
    pub username: String,
}

/// Handle identifying one subscription; pass it to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    notify: Rc<dyn Fn()>,
}

/// Single authority over the persisted session and its change listeners.
pub struct SessionHub {
    storage: Box<dyn SessionStorage>,
    listeners: RefCell<Vec<Listener>>,
    next_listener: Cell<u64>,
}

impl SessionHub {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            storage,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    /// Read the current session. Returns `None` unless every field is
    /// present and the stored user id parses.
    pub fn current(&self) -> Option<Session> {
        let token = self.storage.read(TOKEN_KEY)?;
        let user_id = self.storage.read(USER_ID_KEY)?.parse().ok()?;
        let username = self.storage.read(USERNAME_KEY)?;
        Some(Session {
            token,
            user_id,
            username,
        })
    }

    /// Persist `session`, then synchronously notify every listener.
    /// Establishing over an existing session replaces it.
    pub fn establish(&self, session: &Session) {
        self.storage.write(TOKEN_KEY, &session.token);
        self.storage.write(USER_ID_KEY, &session.user_id.to_string());
        self.storage.write(USERNAME_KEY, &session.username);
        self.notify();
    }

    /// Remove every persisted field, then synchronously notify every
    /// listener. Idempotent: clearing while signed out still notifies.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_ID_KEY);
        self.storage.remove(USERNAME_KEY);
        self.notify();
    }

    /// Register `listener` to run after every `establish` and `clear`, in
    /// registration order. The listener always observes fully updated
    /// storage.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            notify: Rc::new(listener),
        });
        id
    }

    /// Drop the subscription for `id`. Unknown ids are ignored, so a double
    /// unsubscribe is harmless.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|listener| listener.id != id);
    }

    fn notify(&self) {
        // Snapshot the registry so listeners can subscribe or unsubscribe
        // mid-dispatch without invalidating this round's order.
        let snapshot: Vec<(ListenerId, Rc<dyn Fn()>)> = self
            .listeners
            .borrow()
            .iter()
            .map(|listener| (listener.id, Rc::clone(&listener.notify)))
            .collect();
        for (id, notify) in snapshot {
            // A listener unsubscribed earlier in this round must not run.
            let still_registered = self
                .listeners
                .borrow()
                .iter()
                .any(|listener| listener.id == id);
            if still_registered {
                notify();
            }
        }
    }
}
