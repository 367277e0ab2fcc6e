//! Networking modules for the leave API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `profile` keeps the current-user record in step
//! with the session token, and `types` defines the wire schema.

pub mod api;
pub mod profile;
pub mod types;
