//! # API crate — read-only gateway to the user directory
//!
//! Everything the UI fetches goes through the [`Gateway`] trait. There are
//! exactly three reads and no writes:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`Gateway::list_users`] | `GET {base}/users` |
//! | [`Gateway::list_posts_by_user`] | `GET {base}/users/{id}/posts` |
//! | [`Gateway::list_todos_by_user`] | `GET {base}/users/{id}/todos` |
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`FetchError`], the single failure type of every read |
//! | [`http`] | [`HttpGateway`], the `reqwest` implementation used by the app |
//! | [`fixture`] | [`FixtureGateway`], canned in-memory data with call counting for tests |
//!
//! Callers are expected to log a [`FetchError`] and keep whatever state they
//! had. Nothing here retries.

use std::future::Future;

pub mod error;
pub mod fixture;
pub mod http;

pub use error::FetchError;
pub use fixture::FixtureGateway;
pub use http::HttpGateway;

pub use store::{Post, Todo, User, UserId};

/// Read access to users and the records they own.
pub trait Gateway {
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>>;
    fn list_posts_by_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Vec<Post>, FetchError>>;
    fn list_todos_by_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Vec<Todo>, FetchError>>;
}
