//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is selected by the route outlet and reads the session from the
//! auth context. Leave, approval, and employee screens are placeholders for
//! views backed by the remote API; login and signup establish the session.

pub mod approve_leave;
pub mod dashboard;
pub mod edit_employee;
pub mod leave_request;
pub mod leaves;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod signup;
