//! Profile refresh that follows the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Whenever the token changes the app asks the session state for a
//! [`FetchTicket`], reads the user record through a [`ProfileSource`], and
//! hands the result back to the state. The ticket carries the token it was
//! issued for, so a response that lands after logout or a newer login is
//! dropped instead of overwriting fresher data.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and swallowed. The refresh is best-effort: no
//! retry, and the previous `current_user` stays in place.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[cfg(test)]
use std::cell::RefCell;
use std::future::Future;
#[cfg(test)]
use std::rc::Rc;

use super::api::FetchError;
use super::types::UserRecord;

/// Token and user id captured when a profile request is issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: String,
    pub user_id: String,
}

/// Anything that can read a user record by id.
pub trait ProfileSource {
    fn fetch_user(&self, user_id: &str) -> impl Future<Output = Result<UserRecord, FetchError>>;
}

/// Run one fetch for `ticket`, returning the record or `None` after logging the failure.
pub async fn fetch_profile<S: ProfileSource>(source: &S, ticket: &FetchTicket) -> Option<UserRecord> {
    match source.fetch_user(&ticket.user_id).await {
        Ok(user) => Some(user),
        Err(e) => {
            leptos::logging::warn!("profile fetch for user {} failed: {e}", ticket.user_id);
            None
        }
    }
}

/// Records every requested user id and answers with a canned result.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    requests: Rc<RefCell<Vec<String>>>,
    response: Rc<RefCell<Result<UserRecord, FetchError>>>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(response: Result<UserRecord, FetchError>) -> Self {
        Self {
            requests: Rc::default(),
            response: Rc::new(RefCell::new(response)),
        }
    }

    /// Answer later requests with `response`, in every clone.
    pub fn respond_with(&self, response: Result<UserRecord, FetchError>) {
        *self.response.borrow_mut() = response;
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[cfg(test)]
impl ProfileSource for ScriptedSource {
    async fn fetch_user(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        self.requests.borrow_mut().push(user_id.to_owned());
        self.response.borrow().clone()
    }
}
