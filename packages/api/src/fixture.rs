use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::FetchError;
use crate::{Gateway, Post, Todo, User, UserId};

/// In-memory Gateway for testing.
///
/// Serves canned users, posts and todos, filtering posts/todos by owner the
/// way the real API does. Every call is counted, and the gateway can be
/// switched into a failing mode. Clones share data and counters.
#[derive(Clone, Debug, Default)]
pub struct FixtureGateway {
    users: Arc<Mutex<Vec<User>>>,
    posts: Arc<Mutex<Vec<Post>>>,
    todos: Arc<Mutex<Vec<Todo>>>,
    failing: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl FixtureGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap_or_else(PoisonError::into_inner) = users;
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.lock().unwrap_or_else(PoisonError::into_inner) = posts;
        self
    }

    pub fn with_todos(self, todos: Vec<Todo>) -> Self {
        *self.todos.lock().unwrap_or_else(PoisonError::into_inner) = todos;
        self
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of reads issued so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self, url: String) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            Err(FetchError::new(url, "fixture gateway is failing"))
        } else {
            Ok(())
        }
    }
}

impl Gateway for FixtureGateway {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        self.begin("fixture:/users".to_string())?;
        Ok(self.users.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    async fn list_posts_by_user(&self, id: UserId) -> Result<Vec<Post>, FetchError> {
        self.begin(format!("fixture:/users/{id}/posts"))?;
        let posts = self.posts.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(posts.iter().filter(|p| p.user_id == id).cloned().collect())
    }

    async fn list_todos_by_user(&self, id: UserId) -> Result<Vec<Todo>, FetchError> {
        self.begin(format!("fixture:/users/{id}/todos"))?;
        let todos = self.todos.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(todos.iter().filter(|t| t.user_id == id).cloned().collect())
    }
}
