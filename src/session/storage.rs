//! Storage backends for the session propagator.
//!
//! DESIGN
//! ======
//! `SessionHub` reads and writes through the `SessionStorage` trait so the
//! propagator logic is identical across targets: the browser build talks to
//! `window.localStorage`, while tests and server-side rendering use an
//! in-memory map. Browser storage can be unavailable (disabled, private
//! mode); `BrowserStorage` degrades to reads returning `None` and silently
//! dropped writes rather than failing hydration.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// A string key/value store holding the persisted session fields.
pub trait SessionStorage {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str);
    /// Remove `key` and its value, if present.
    fn remove(&self, key: &str);
}

/// In-memory storage used by tests and the server-side build.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// `window.localStorage`-backed storage used by the browser build.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
