//! Login state as a tagged union.

use store::{SessionStore, User};

/// Who is logged in, if anyone.
///
/// Everything that renders differently for the two cases matches on this
/// instead of checking an `Option` inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    /// Seed from whatever the store persisted on a previous visit.
    pub fn from_store<S: SessionStore + ?Sized>(store: &S) -> Self {
        store.load().into()
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoggedIn(user) => Some(user),
            Session::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}

impl From<Option<User>> for Session {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Session::LoggedIn(user),
            None => Session::LoggedOut,
        }
    }
}
