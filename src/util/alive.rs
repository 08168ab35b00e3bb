//! Component-lifetime flags for spawned network work.
//!
//! DESIGN
//! ======
//! Responses can land after the page that asked for them is gone. Every
//! spawned task holds a flag tied to its component and re-checks it after
//! each await, dropping the result instead of writing to signals that no
//! longer back any UI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Flag that flips to `false` when the current reactive owner is cleaned
/// up. Spawned tasks hold a clone and bail out instead of applying stale
/// results.
#[must_use]
pub fn component_alive() -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    let alive_on_cleanup = Arc::clone(&alive);
    on_cleanup(move || alive_on_cleanup.store(false, Ordering::Relaxed));
    alive
}
