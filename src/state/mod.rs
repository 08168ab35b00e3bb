//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page domain so components depend on small focused
//! models. Only [`auth`] is app-wide context; the rest are created per
//! page as `RwSignal`s.

pub mod auth;
pub mod catalog;
pub mod library;
pub mod profile;
pub mod watch;
