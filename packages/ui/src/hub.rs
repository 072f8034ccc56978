//! # Application state — users, session and the current user's data
//!
//! [`Hub`] is the one piece of top-level state the app shares through
//! context. It owns:
//!
//! | Slice | Filled by |
//! |-------|-----------|
//! | `user_list` | [`Hub::apply_user_list`], once at mount |
//! | `current_user` | seeded from the session store, then [`Hub::login`] / [`Hub::logout`] |
//! | `user_posts` | [`Hub::apply_posts`] |
//! | `user_todos` | [`Hub::apply_todos`] |
//!
//! ## Load generations
//!
//! Every change of the current user bumps a generation counter. The provider
//! asks for a [`LoadTicket`] after the change and tags both fetches with it.
//! When a result comes back its ticket is compared against the current
//! generation and dropped if the user changed in the meantime, so a slow
//! response for a previous user can never overwrite the new user's data.
//!
//! Failed fetches are logged and leave the slice as it was.

use api::FetchError;
use store::{Post, SessionStore, Todo, User, UserId};

use crate::session::Session;

/// Tags a posts/todos fetch with the session generation it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub user_id: UserId,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hub {
    user_list: Vec<User>,
    current_user: Session,
    user_posts: Vec<Post>,
    user_todos: Vec<Todo>,
    generation: u64,
}

impl Hub {
    pub fn new(current_user: Session) -> Self {
        Self {
            current_user,
            ..Self::default()
        }
    }

    /// State at startup: nothing fetched, session read from `store`.
    pub fn seeded<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self::new(Session::from_store(store))
    }

    pub fn user_list(&self) -> &[User] {
        &self.user_list
    }

    pub fn current_user(&self) -> &Session {
        &self.current_user
    }

    pub fn user_posts(&self) -> &[Post] {
        &self.user_posts
    }

    pub fn user_todos(&self) -> &[Todo] {
        &self.user_todos
    }

    pub fn apply_user_list(&mut self, result: Result<Vec<User>, FetchError>) {
        match result {
            Ok(users) => self.user_list = users,
            Err(e) => tracing::error!("Failed to load users: {}", e),
        }
    }

    /// Switch the session. Logging out empties posts and todos right away.
    ///
    /// Setting the session it already has is a no-op and does not start a
    /// new generation.
    pub fn set_current_user(&mut self, session: Session) {
        if self.current_user == session {
            return;
        }
        self.generation += 1;
        self.current_user = session;
        if !self.current_user.is_logged_in() {
            self.user_posts.clear();
            self.user_todos.clear();
        }
    }

    pub fn login<S: SessionStore + ?Sized>(&mut self, store: &S, user: User) {
        tracing::info!("Logging in as {} ({})", user.username, user.id);
        store.save(&user);
        self.set_current_user(Session::LoggedIn(user));
    }

    pub fn logout<S: SessionStore + ?Sized>(&mut self, store: &S) {
        if let Some(user) = self.current_user.user() {
            tracing::info!("Logging out {} ({})", user.username, user.id);
        }
        store.clear();
        self.set_current_user(Session::LoggedOut);
    }

    /// Ticket for loading the current user's data, or `None` when logged out.
    pub fn load_ticket(&self) -> Option<LoadTicket> {
        self.current_user.user().map(|user| LoadTicket {
            user_id: user.id,
            generation: self.generation,
        })
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && self.current_user.is_logged_in()
    }

    /// Store fetched posts. Returns whether the slice changed.
    pub fn apply_posts(&mut self, ticket: LoadTicket, result: Result<Vec<Post>, FetchError>) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!("Discarding stale posts for user {}", ticket.user_id);
            return false;
        }
        match result {
            Ok(posts) => {
                self.user_posts = posts;
                true
            }
            Err(e) => {
                tracing::error!("Failed to load posts for user {}: {}", ticket.user_id, e);
                false
            }
        }
    }

    /// Store fetched todos. Returns whether the slice changed.
    pub fn apply_todos(&mut self, ticket: LoadTicket, result: Result<Vec<Todo>, FetchError>) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!("Discarding stale todos for user {}", ticket.user_id);
            return false;
        }
        match result {
            Ok(todos) => {
                self.user_todos = todos;
                true
            }
            Err(e) => {
                tracing::error!("Failed to load todos for user {}: {}", ticket.user_id, e);
                false
            }
        }
    }
}
