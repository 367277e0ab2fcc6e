//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the persisted record; `auth` owns it together with the
//! fetched profile and exposes the login/logout transitions to every view.

pub mod auth;
pub mod session;
