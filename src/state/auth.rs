//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the single owner of the session record and the fetched
//! profile; every transition goes through it so it can be exercised without a
//! reactive runtime. `AuthContext` is the `Copy` handle the app provides via
//! Leptos context: views read the derived fields from it and call `login`,
//! `logout`, and `get_user_data` on it. The route guard reads the same handle.
//!
//! The handle is generic over its storage slot and profile source. The app
//! uses `localStorage` and the HTTP API; tests plug in in-memory versions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::HttpProfileSource;
use crate::net::profile::{FetchTicket, ProfileSource, fetch_profile};
use crate::net::types::{UserRecord, display_name};
use crate::state::session::Session;
use crate::util::session_store::{BrowserStorage, KeyValueStorage, SessionStore};

/// Session plus the profile fetched for it.
///
/// `loading` stays `true` until the persisted slot has been read, so guards
/// neither redirect nor render before the session is known.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Session,
    pub current_user: Option<UserRecord>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            current_user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State seeded from the persisted slot; absent or corrupt reads as anonymous.
    pub fn restore<S: KeyValueStorage>(store: &SessionStore<S>) -> Self {
        Self {
            session: store.load().unwrap_or_default(),
            current_user: None,
            loading: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Replace the session and persist it.
    ///
    /// A profile belonging to a different user is dropped right away rather
    /// than shown until the next fetch lands.
    pub fn login<S: KeyValueStorage>(&mut self, store: &SessionStore<S>, session: Session) {
        if session.user_id != self.session.user_id {
            self.current_user = None;
        }
        self.session = session;
        self.loading = false;
        if let Err(e) = store.save(&self.session) {
            leptos::logging::warn!("failed to persist session: {e}");
        }
    }

    /// Clear the persisted slot and reset to the anonymous state.
    pub fn logout<S: KeyValueStorage>(&mut self, store: &SessionStore<S>) {
        if let Err(e) = store.clear() {
            leptos::logging::warn!("failed to clear persisted session: {e}");
        }
        self.session = Session::default();
        self.current_user = None;
        self.loading = false;
    }

    /// Ticket for a profile fetch, or `None` when there is no session.
    pub fn profile_request(&self) -> Option<FetchTicket> {
        if !self.is_logged_in() {
            return None;
        }
        Some(FetchTicket {
            token: self.session.token.clone(),
            user_id: self.session.user_id.clone(),
        })
    }

    /// Store a fetched profile if `ticket` still matches the live token.
    ///
    /// Returns `false` when the response was superseded and discarded.
    pub fn apply_profile(&mut self, ticket: &FetchTicket, user: UserRecord) -> bool {
        if !self.is_logged_in() || ticket.token != self.session.token {
            return false;
        }
        self.current_user = Some(user);
        true
    }

    /// Name to greet the user with: profile name or email, else the user id.
    pub fn display_name(&self) -> String {
        self.current_user
            .as_ref()
            .and_then(display_name)
            .map_or_else(|| self.session.user_id.clone(), str::to_owned)
    }
}

/// Shared handle to the auth state, provided once by the root component.
pub struct AuthContext<S = BrowserStorage, P = HttpProfileSource> {
    state: RwSignal<AuthState>,
    store: StoredValue<SessionStore<S>, LocalStorage>,
    source: StoredValue<P, LocalStorage>,
    config: ClientConfig,
}

impl<S, P> Clone for AuthContext<S, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, P> Copy for AuthContext<S, P> {}

impl AuthContext {
    /// Context over `localStorage` and the leave API.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_backends(
            SessionStore::new(BrowserStorage, config.session_key),
            HttpProfileSource::new(config),
            config,
        )
    }

    /// Create the context and make it available to all descendants.
    pub fn provide(config: ClientConfig) -> Self {
        let ctx = Self::new(config);
        provide_context(ctx);
        ctx
    }
}

impl<S, P> AuthContext<S, P>
where
    S: KeyValueStorage + 'static,
    P: ProfileSource + Clone + 'static,
{
    pub fn with_backends(store: SessionStore<S>, source: P, config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            store: StoredValue::new_local(store),
            source: StoredValue::new_local(source),
            config,
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config
    }

    /// Seed the state from the persisted slot. Called once after mount.
    pub fn restore(&self) {
        self.state.set(self.store.with_value(AuthState::restore));
    }

    /// Read the state, tracking it in the current reactive scope.
    pub fn with<R>(&self, f: impl FnOnce(&AuthState) -> R) -> R {
        self.state.with(f)
    }

    pub fn is_loading(&self) -> bool {
        self.with(|s| s.loading)
    }

    pub fn is_logged_in(&self) -> bool {
        self.with(AuthState::is_logged_in)
    }

    pub fn token(&self) -> String {
        self.with(|s| s.session.token.clone())
    }

    pub fn user_id(&self) -> String {
        self.with(|s| s.session.user_id.clone())
    }

    pub fn is_super_user(&self) -> bool {
        self.with(|s| s.session.is_super_user)
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.with(|s| s.current_user.clone())
    }

    pub fn display_name(&self) -> String {
        self.with(AuthState::display_name)
    }

    pub fn login(&self, token: impl Into<String>, user_id: impl Into<String>, is_super_user: bool) {
        let session = Session::new(token, user_id, is_super_user);
        self.store
            .with_value(|store| self.state.update(|s| s.login(store, session)));
    }

    pub fn logout(&self) {
        self.store.with_value(|store| self.state.update(|s| s.logout(store)));
    }

    /// Fire-and-forget refresh of `current_user` for the live session.
    pub fn get_user_data(&self) {
        if !self.state.with_untracked(AuthState::is_logged_in) {
            return;
        }
        let ctx = *self;
        leptos::task::spawn_local(async move {
            ctx.refresh_profile().await;
        });
    }

    /// One profile fetch for the live session.
    ///
    /// Returns `true` if the response was stored. Failures and responses for
    /// a token that has since changed leave `current_user` untouched.
    pub async fn refresh_profile(self) -> bool {
        let Some(ticket) = self.state.with_untracked(AuthState::profile_request) else {
            return false;
        };
        let source = self.source.get_value();
        let Some(user) = fetch_profile(&source, &ticket).await else {
            return false;
        };
        let applied = self
            .state
            .try_maybe_update(|s| {
                let applied = s.apply_profile(&ticket, user);
                (applied, applied)
            })
            .unwrap_or(false);
        if !applied {
            leptos::logging::log!("dropping profile response for a superseded session");
        }
        applied
    }
}
