//! # videostream
//!
//! Leptos + WASM frontend for the video sharing platform. Renders the
//! public catalog, playback, upload, and profile surfaces against the
//! existing REST backend.
//!
//! This crate contains pages, components, application state, the typed
//! HTTP client, and the session propagator that keeps every subscribed
//! view in step with the signed-in user.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entrypoint: attach the client runtime to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
