//! Route guard shared by every protected path.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router applies [`guard`] while resolving a path; the outlet installs
//! [`install_guard_redirect`] so a `Redirect` outcome turns into a navigation.
//! Both read the session from the auth context, never from storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";

/// Outcome of a capability check around some view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(&'static str),
}

impl<V> Guarded<V> {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Let `view` through for an authenticated session, otherwise send the user to `/login`.
///
/// The attempted path is not remembered.
pub fn guard<V>(session: &Session, view: V) -> Guarded<V> {
    if session.is_authenticated() {
        Guarded::Render(view)
    } else {
        Guarded::Redirect(LOGIN_PATH)
    }
}

/// Navigate (replacing history) whenever `outcome` settles on a redirect.
///
/// `None` means the session is still being restored; nothing happens then.
pub fn install_guard_redirect<V, F>(outcome: Memo<Option<Guarded<V>>>, navigate: F)
where
    V: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = outcome.with(|o| o.as_ref().and_then(Guarded::redirect_target));
        if let Some(path) = target {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
