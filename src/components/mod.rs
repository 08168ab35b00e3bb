//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and list items while pages own route-scoped
//! loading and mutation; anything identity-aware reads the auth context
//! rather than touching storage.

pub mod comments;
pub mod confirm_dialog;
pub mod login_prompt;
pub mod navbar;
pub mod skeleton;
pub mod video_card;
