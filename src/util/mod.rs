//! Small cross-page helpers.
//!
//! [`guard`] keeps signed-in-only pages honest, [`alive`] ties spawned
//! requests to component lifetimes, [`media`] normalizes stored media paths
//! into loadable URLs, and [`format`] renders counts and timestamps for
//! display.

pub mod alive;
pub mod format;
pub mod guard;
pub mod media;
