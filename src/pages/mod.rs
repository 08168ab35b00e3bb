//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, in-flight
//! request lifetimes) and delegates rendering details to `components`.

pub mod history;
pub mod home;
pub mod liked;
pub mod login;
pub mod profile;
pub mod register;
pub mod upload;
pub mod watch;
