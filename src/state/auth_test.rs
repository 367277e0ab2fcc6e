use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::api::FetchError;
use crate::net::profile::ScriptedSource;
use crate::util::session_store::MemoryStorage;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default(), "items")
}

fn logged_in(store: &SessionStore<MemoryStorage>) -> AuthState {
    let mut state = AuthState::restore(store);
    state.login(store, Session::new("tok123", "u1", false));
    state
}

// =============================================================
// AuthState defaults and restore
// =============================================================

#[test]
fn auth_state_default_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_logged_in());
    assert!(state.current_user.is_none());
}

#[test]
fn restore_without_record_is_anonymous() {
    let state = AuthState::restore(&store());
    assert!(!state.loading);
    assert!(!state.is_logged_in());
    assert_eq!(state.session, Session::default());
}

#[test]
fn restore_reads_persisted_session() {
    let store = store();
    store.save(&Session::new("tok", "u9", true)).unwrap();
    let state = AuthState::restore(&store);
    assert!(state.is_logged_in());
    assert_eq!(state.session.user_id, "u9");
    assert!(state.session.is_super_user);
    assert!(state.current_user.is_none());
}

#[test]
fn restore_treats_corrupt_record_as_logged_out() {
    let store = store();
    store.storage().set_item("items", "{{{").unwrap();
    assert!(!AuthState::restore(&store).is_logged_in());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_exact_record() {
    let store = store();
    let state = logged_in(&store);
    assert!(state.is_logged_in());
    assert_eq!(
        store.storage().raw("items").as_deref(),
        Some(r#"{"token":"tok123","userId":"u1","isSuperUser":false}"#)
    );
    assert_eq!(
        SessionStore::new(store.storage().clone(), "items").load(),
        Some(Session::new("tok123", "u1", false))
    );
}

#[test]
fn login_with_empty_token_stays_anonymous() {
    let store = store();
    let mut state = AuthState::restore(&store);
    state.login(&store, Session::new("", "u1", true));
    assert!(!state.is_logged_in());
}

#[test]
fn login_as_other_user_drops_previous_profile() {
    let store = store();
    let mut state = logged_in(&store);
    let ticket = state.profile_request().unwrap();
    assert!(state.apply_profile(&ticket, json!({ "name": "Ada" })));

    state.login(&store, Session::new("tok456", "u2", true));
    assert!(state.current_user.is_none());
}

#[test]
fn relogin_as_same_user_keeps_profile() {
    let store = store();
    let mut state = logged_in(&store);
    let ticket = state.profile_request().unwrap();
    state.apply_profile(&ticket, json!({ "name": "Ada" }));

    state.login(&store, Session::new("tok789", "u1", false));
    assert_eq!(state.current_user, Some(json!({ "name": "Ada" })));
}

#[test]
fn logout_clears_slot_session_and_profile() {
    let store = store();
    let mut state = logged_in(&store);
    let ticket = state.profile_request().unwrap();
    state.apply_profile(&ticket, json!({ "name": "Ada" }));

    state.logout(&store);

    assert!(!state.is_logged_in());
    assert_eq!(state.session, Session::default());
    assert!(state.current_user.is_none());
    assert_eq!(store.storage().raw("items"), None);
    assert_eq!(SessionStore::new(store.storage().clone(), "items").load(), None);
}

#[test]
fn logout_when_anonymous_is_harmless() {
    let store = store();
    let mut state = AuthState::restore(&store);
    state.logout(&store);
    assert!(!state.is_logged_in());
}

// =============================================================
// Profile tickets
// =============================================================

#[test]
fn profile_request_none_without_token() {
    assert_eq!(AuthState::restore(&store()).profile_request(), None);
}

#[test]
fn profile_request_carries_token_and_user() {
    let state = logged_in(&store());
    assert_eq!(
        state.profile_request(),
        Some(FetchTicket {
            token: "tok123".to_owned(),
            user_id: "u1".to_owned(),
        })
    );
}

#[test]
fn apply_profile_discards_response_after_logout() {
    let store = store();
    let mut state = logged_in(&store);
    let ticket = state.profile_request().unwrap();
    state.logout(&store);

    assert!(!state.apply_profile(&ticket, json!({ "name": "Ada" })));
    assert!(state.current_user.is_none());
}

#[test]
fn apply_profile_discards_response_for_older_token() {
    let store = store();
    let mut state = logged_in(&store);
    let stale = state.profile_request().unwrap();
    state.login(&store, Session::new("tok-new", "u1", false));
    let fresh = state.profile_request().unwrap();

    assert!(state.apply_profile(&fresh, json!({ "name": "Fresh" })));
    assert!(!state.apply_profile(&stale, json!({ "name": "Stale" })));
    assert_eq!(state.current_user, Some(json!({ "name": "Fresh" })));
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_falls_back_to_user_id() {
    assert_eq!(logged_in(&store()).display_name(), "u1");
}

#[test]
fn display_name_uses_profile_when_loaded() {
    let mut state = logged_in(&store());
    let ticket = state.profile_request().unwrap();
    state.apply_profile(&ticket, json!({ "name": "Ada Lovelace" }));
    assert_eq!(state.display_name(), "Ada Lovelace");
}

// =============================================================
// AuthContext
// =============================================================

type TestContext = AuthContext<MemoryStorage, ScriptedSource>;

fn context(storage: &MemoryStorage, source: &ScriptedSource) -> TestContext {
    AuthContext::with_backends(
        SessionStore::new(storage.clone(), "items"),
        source.clone(),
        ClientConfig::default(),
    )
}

#[test]
fn context_starts_loading_until_restored() {
    Owner::new().with(|| {
        let ctx = context(&MemoryStorage::default(), &ScriptedSource::new(Ok(json!({}))));
        assert!(ctx.is_loading());
        ctx.restore();
        assert!(!ctx.is_loading());
        assert!(!ctx.is_logged_in());
    });
}

#[test]
fn restored_session_fetches_profile_once_and_failure_leaves_user_unset() {
    Owner::new().with(|| {
        let storage = MemoryStorage::default();
        storage
            .set_item("items", r#"{"token":"tok123","userId":"u1","isSuperUser":false}"#)
            .unwrap();
        let source = ScriptedSource::new(Err(FetchError::Transport("connection refused".to_owned())));
        let ctx = context(&storage, &source);

        ctx.restore();
        assert!(ctx.is_logged_in());
        assert_eq!(ctx.user_id(), "u1");

        assert!(!block_on(ctx.refresh_profile()));
        assert_eq!(source.requests(), vec!["u1".to_owned()]);
        assert_eq!(ctx.current_user(), None);
        assert!(ctx.is_logged_in());
    });
}

#[test]
fn refresh_stores_fetched_profile() {
    Owner::new().with(|| {
        let source = ScriptedSource::new(Ok(json!({ "name": "Ada", "role": "manager" })));
        let ctx = context(&MemoryStorage::default(), &source);
        ctx.restore();
        ctx.login("tok123", "u1", false);

        assert!(block_on(ctx.refresh_profile()));
        assert_eq!(ctx.current_user(), Some(json!({ "name": "Ada", "role": "manager" })));
        assert_eq!(ctx.display_name(), "Ada");
    });
}

#[test]
fn refresh_failure_keeps_previous_profile() {
    Owner::new().with(|| {
        let source = ScriptedSource::new(Ok(json!({ "name": "Ada" })));
        let ctx = context(&MemoryStorage::default(), &source);
        ctx.restore();
        ctx.login("tok123", "u1", false);
        assert!(block_on(ctx.refresh_profile()));

        source.respond_with(Err(FetchError::Status(503)));
        assert!(!block_on(ctx.refresh_profile()));

        assert_eq!(ctx.current_user(), Some(json!({ "name": "Ada" })));
        assert_eq!(source.requests(), vec!["u1".to_owned(), "u1".to_owned()]);
    });
}

#[test]
fn anonymous_context_issues_no_fetch() {
    Owner::new().with(|| {
        let source = ScriptedSource::new(Ok(json!({})));
        let ctx = context(&MemoryStorage::default(), &source);
        ctx.restore();

        assert!(!block_on(ctx.refresh_profile()));
        assert!(source.requests().is_empty());
    });
}

#[test]
fn context_login_persists_record() {
    Owner::new().with(|| {
        let storage = MemoryStorage::default();
        let ctx = context(&storage, &ScriptedSource::new(Ok(json!({}))));
        ctx.restore();
        ctx.login("tok123", "u1", true);

        assert!(ctx.is_logged_in());
        assert!(ctx.is_super_user());
        assert_eq!(ctx.token(), "tok123");
        assert_eq!(
            storage.raw("items").as_deref(),
            Some(r#"{"token":"tok123","userId":"u1","isSuperUser":true}"#)
        );
        assert_eq!(
            SessionStore::new(storage, "items").load(),
            Some(Session::new("tok123", "u1", true))
        );
    });
}

#[test]
fn context_logout_clears_slot_and_profile() {
    Owner::new().with(|| {
        let storage = MemoryStorage::default();
        let ctx = context(&storage, &ScriptedSource::new(Ok(json!({ "name": "Ada" }))));
        ctx.restore();
        ctx.login("tok123", "u1", false);
        assert!(block_on(ctx.refresh_profile()));

        ctx.logout();

        assert!(!ctx.is_logged_in());
        assert_eq!(ctx.token(), "");
        assert_eq!(ctx.current_user(), None);
        assert_eq!(storage.raw("items"), None);
    });
}

#[test]
fn new_context_sees_session_saved_by_previous_one() {
    Owner::new().with(|| {
        let storage = MemoryStorage::default();
        let source = ScriptedSource::new(Ok(json!({})));
        context(&storage, &source).login("tok123", "u1", false);

        let reloaded = context(&storage, &source);
        reloaded.restore();
        assert_eq!(reloaded.user_id(), "u1");
        assert_eq!(reloaded.token(), "tok123");
    });
}
