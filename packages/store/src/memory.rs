use std::sync::{Arc, Mutex, PoisonError};

use crate::models::User;
use crate::session::{decode_user, encode_user, SessionStore};

/// In-memory SessionStore for testing and native builds.
///
/// Holds the encoded record, like browser storage would, so the JSON
/// round trip is exercised off the browser too. Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `user`, as after a previous page load.
    pub fn with_user(user: &User) -> Self {
        let store = Self::new();
        store.save(user);
        store
    }

    /// Overwrite the raw stored value.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.into());
    }

    /// Whether anything is stored, decodable or not.
    pub fn is_empty(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<User> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_deref().and_then(decode_user)
    }

    fn save(&self, user: &User) {
        if let Some(raw) = encode_user(user) {
            self.set_raw(raw);
        }
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
