use futures::executor::block_on;
use serde_json::json;

use super::*;

fn ticket(token: &str, user_id: &str) -> FetchTicket {
    FetchTicket {
        token: token.to_owned(),
        user_id: user_id.to_owned(),
    }
}

// =============================================================
// fetch_profile
// =============================================================

#[test]
fn fetch_profile_returns_record_on_success() {
    let source = ScriptedSource::new(Ok(json!({ "name": "Ada" })));
    let user = block_on(fetch_profile(&source, &ticket("tok", "u1")));
    assert_eq!(user, Some(json!({ "name": "Ada" })));
    assert_eq!(source.requests(), vec!["u1".to_owned()]);
}

#[test]
fn fetch_profile_swallows_transport_errors() {
    let source = ScriptedSource::new(Err(FetchError::Transport("connection refused".to_owned())));
    assert_eq!(block_on(fetch_profile(&source, &ticket("tok", "u1"))), None);
    assert_eq!(source.requests(), vec!["u1".to_owned()]);
}

#[test]
fn fetch_profile_swallows_status_errors() {
    let source = ScriptedSource::new(Err(FetchError::Status(500)));
    assert_eq!(block_on(fetch_profile(&source, &ticket("tok", "u1"))), None);
}

#[test]
fn fetch_profile_swallows_decode_errors() {
    let source = ScriptedSource::new(Err(FetchError::Decode("missing field `user`".to_owned())));
    assert_eq!(block_on(fetch_profile(&source, &ticket("tok", "u1"))), None);
}

#[test]
fn clones_share_the_request_log() {
    let source = ScriptedSource::new(Ok(json!({})));
    let clone = source.clone();
    block_on(fetch_profile(&clone, &ticket("tok", "u2")));
    assert_eq!(source.requests(), vec!["u2".to_owned()]);
}
