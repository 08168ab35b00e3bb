//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `error` the client-side error taxonomy,
//! and `api` the request helpers every page goes through. Token attachment
//! and rejected-token handling live in `api` and nowhere else.

pub mod api;
pub mod error;
pub mod types;
