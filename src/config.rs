//! Client and host configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the API origin is baked in
//! with `option_env!` when the crate is compiled. The SSR host reads its port
//! from the environment at startup (after `dotenvy` has loaded `.env`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `LEAVE_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// `localStorage` key holding the serialized session record.
pub const SESSION_KEY: &str = "items";

/// Port the SSR host binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

/// Static settings shared by the session context and the API helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the leave API, without a trailing slash.
    pub api_base_url: &'static str,
    /// Storage slot for the session record.
    pub session_key: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL,
            session_key: SESSION_KEY,
        }
    }
}

impl ClientConfig {
    /// Resolve the config from variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("LEAVE_API_BASE_URL"))
    }

    fn with_api_base(raw: Option<&'static str>) -> Self {
        let api_base_url = raw
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    pub fn user_endpoint(&self, user_id: &str) -> String {
        format!("{}/api/users/{user_id}", self.api_base_url)
    }

    pub fn login_endpoint(&self) -> String {
        format!("{}/api/users/login", self.api_base_url)
    }

    pub fn signup_endpoint(&self) -> String {
        format!("{}/api/users/signup", self.api_base_url)
    }
}

/// Runtime settings for the SSR host binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Read host settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
