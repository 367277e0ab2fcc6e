//! REST API helpers for communicating with the leave API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, FetchError>`; callers decide whether a
//! failure is surfaced (login form) or only logged (profile refresh).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::profile::ProfileSource;
use super::types::{AuthResponse, Credentials, SignupRequest, UserRecord};
use crate::config::ClientConfig;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_user_envelope(body: &str) -> Result<UserRecord, FetchError> {
    serde_json::from_str::<super::types::UserEnvelope>(body)
        .map(|envelope| envelope.user)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_auth_response(body: &str) -> Result<AuthResponse, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<String, FetchError> {
    check_status(resp.status())?;
    resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<String, FetchError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| FetchError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    read_body(resp).await
}

/// Fetch a user record from `GET /api/users/{user_id}`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a body
/// without a `user` field.
pub async fn fetch_user(config: ClientConfig, user_id: &str) -> Result<UserRecord, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.user_endpoint(user_id))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let body = read_body(resp).await?;
        decode_user_envelope(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user_id);
        Err(FetchError::Unavailable)
    }
}

/// Exchange credentials for a session via `POST /api/users/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is not a session.
pub async fn login(config: ClientConfig, credentials: &Credentials<'_>) -> Result<AuthResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_json(&config.login_endpoint(), credentials).await?;
        decode_auth_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(FetchError::Unavailable)
    }
}

/// Register a new employee via `POST /api/users/signup`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is not a session.
pub async fn signup(config: ClientConfig, request: &SignupRequest<'_>) -> Result<AuthResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_json(&config.signup_endpoint(), request).await?;
        decode_auth_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(FetchError::Unavailable)
    }
}

/// [`ProfileSource`] backed by the leave API.
#[derive(Clone, Copy, Debug)]
pub struct HttpProfileSource {
    config: ClientConfig,
}

impl HttpProfileSource {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ProfileSource for HttpProfileSource {
    async fn fetch_user(&self, user_id: &str) -> Result<UserRecord, FetchError> {
        fetch_user(self.config, user_id).await
    }
}
