//! Persistence of the session record in a key-value slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the slot is `localStorage`; anything else (SSR, tests) goes
//! through the same `KeyValueStorage` seam so the session context never
//! touches web-sys directly.
//!
//! ERROR HANDLING
//! ==============
//! `load` fails soft: a missing, blank, or unparseable record reads as "no
//! session" and the problem is logged. Only a JSON object counts as a record. Writes report `StorageError` and leave
//! the decision to the caller.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;

use crate::state::session::Session;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("session record serialization failed: {0}")]
    Serialize(String),
}

/// Minimal string key-value slot, shaped after the Web Storage API.
pub trait KeyValueStorage {
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` under `hydrate`; an always-empty slot elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// In-process slot shared between clones, so a second store over the same
/// storage behaves like a page reload.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Whole-record reads and writes of the [`Session`] under one key.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    /// Previously saved session, or `None` if the slot is absent, blank, or corrupt.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.storage.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                leptos::logging::warn!("session slot {:?} unreadable: {e}", self.key);
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }
        let value = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Null) => return None,
            Ok(value @ serde_json::Value::Object(_)) => value,
            Ok(other) => {
                leptos::logging::warn!("discarding non-object session record in {:?}: {other}", self.key);
                return None;
            }
            Err(e) => {
                leptos::logging::warn!("discarding corrupt session record in {:?}: {e}", self.key);
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding malformed session record in {:?}: {e}", self.key);
                None
            }
        }
    }

    /// Serialize and overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(self.key, &raw)
    }

    /// Remove the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend removal fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(self.key)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
