//! The persisted session record.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Credentials issued by the API at login.
///
/// Serialized as `{ "token", "userId", "isSuperUser" }`. An empty `token`
/// means no session; the other fields are only meaningful when it is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub is_super_user: bool,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, is_super_user: bool) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            is_super_user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
