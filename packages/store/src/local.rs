//! # Browser `localStorage` session store
//!
//! [`LocalStorageSession`] is the [`SessionStore`] used on the **web platform**.
//! The user record is stored as JSON under one key (default `"currentUser"`),
//! so it survives page reloads.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (no window), disabled (privacy modes) or full.
//! None of that is surfaced: reads return `None`, writes log and do nothing.

use crate::models::User;
use crate::session::{decode_user, encode_user, SessionStore, DEFAULT_SESSION_KEY};

/// `localStorage`-backed SessionStore.
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
    key: String,
}

impl Default for LocalStorageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageSession {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_SESSION_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStorageSession {
    fn load(&self) -> Option<User> {
        let storage = self.storage()?;
        match storage.get_item(&self.key) {
            Ok(raw) => raw.as_deref().and_then(decode_user),
            Err(e) => {
                tracing::warn!("Failed to read session key {}: {:?}", self.key, e);
                None
            }
        }
    }

    fn save(&self, user: &User) {
        let Some(storage) = self.storage() else {
            return;
        };
        let Some(raw) = encode_user(user) else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key, &raw) {
            tracing::error!("Failed to persist session for user {}: {:?}", user.id, e);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            tracing::error!("Failed to clear session key {}: {:?}", self.key, e);
        }
    }
}
