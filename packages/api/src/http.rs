//! # HTTP gateway
//!
//! [`HttpGateway`] performs the three reads with a shared [`reqwest::Client`].
//! On the web platform reqwest goes through the browser `fetch` API; natively
//! it runs on tokio (tests use it against an in-process mock server).
//!
//! Each request is a plain `GET` with a JSON body expected back. A non-2xx
//! status is an error even if the body happens to be JSON.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::{Gateway, Post, Todo, User, UserId};

/// `reqwest`-backed [`Gateway`].
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn posts_url(&self, id: UserId) -> String {
        format!("{}/users/{id}/posts", self.base_url)
    }

    pub fn todos_url(&self, id: UserId) -> String {
        format!("{}/users/{id}/todos", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::new(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(&url, format!("HTTP {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::new(&url, format!("invalid response body: {e}")))
    }
}

impl Gateway for HttpGateway {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        self.get_json(self.users_url()).await
    }

    async fn list_posts_by_user(&self, id: UserId) -> Result<Vec<Post>, FetchError> {
        self.get_json(self.posts_url(id)).await
    }

    async fn list_todos_by_user(&self, id: UserId) -> Result<Vec<Todo>, FetchError> {
        self.get_json(self.todos_url(id)).await
    }
}
