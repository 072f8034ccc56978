//! # Session store — the persisted "current user" slot
//!
//! [`SessionStore`] is a single-key, single-value slot holding the logged-in
//! [`User`]. It is read once at startup to seed the in-memory session and
//! written on every login/logout. Implementations:
//!
//! - [`crate::MemorySessionStore`] — process memory, used natively and in tests.
//! - `LocalStorageSession` — browser `localStorage` (wasm + `web` feature).
//!
//! Calls are synchronous and infallible from the caller's point of view.
//! Backends log storage failures and carry on, so a broken or disabled
//! storage degrades to "nobody is remembered" instead of breaking the UI.

use crate::models::User;

/// Default storage key for the persisted session.
pub const DEFAULT_SESSION_KEY: &str = "currentUser";

/// Persisted slot for the logged-in user.
pub trait SessionStore {
    /// Returns the persisted user, or `None` if nothing (decodable) is stored.
    fn load(&self) -> Option<User>;
    /// Persist `user` as the current user, replacing any previous one.
    fn save(&self, user: &User);
    /// Remove any persisted user.
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn load(&self) -> Option<User> {
        (**self).load()
    }

    fn save(&self, user: &User) {
        (**self).save(user)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Decode a stored session record, treating garbage as "no session".
pub(crate) fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Ignoring undecodable stored session: {}", e);
            None
        }
    }
}

pub(crate) fn encode_user(user: &User) -> Option<String> {
    match serde_json::to_string(user) {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::error!("Failed to encode session for user {}: {}", user.id, e);
            None
        }
    }
}
