//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! The user record is kept as raw JSON: the shell only passes it through to
//! views, so it never depends on the API's employee schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::Session;

/// Full user record as returned by the API. Opaque to the shell.
pub type UserRecord = serde_json::Value;

/// Envelope of `GET /api/users/{userId}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub user: UserRecord,
}

/// Successful login or signup response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    #[serde(default)]
    pub is_super_user: bool,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session::new(resp.token, resp.user_id, resp.is_super_user)
    }
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Best-effort display name from a user record: `name`, then `email`.
pub fn display_name(user: &UserRecord) -> Option<&str> {
    ["name", "email"]
        .into_iter()
        .find_map(|field| user.get(field).and_then(serde_json::Value::as_str))
        .filter(|s| !s.is_empty())
}
