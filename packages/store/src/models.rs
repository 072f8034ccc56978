//! # Domain models for users, posts and todos
//!
//! The records served by the directory API. All of them are flat and
//! `Serialize + Deserialize` so they can be decoded straight from the JSON
//! responses and written back into browser storage as the session record.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Numeric user identifier. Parsed from text at the UI boundary (the select control's value) so comparisons are always numeric. |
//! | [`User`] | A directory entry. `username` is what the header shows; the full `name`, when the API sends one, titles the posts and todos views. |
//! | [`Post`] | A post owned by one user through `user_id`. |
//! | [`Todo`] | A to-do item owned by one user through `user_id`. |
//!
//! Unknown JSON fields are ignored, so the richer user objects the public API
//! returns (address, company, ...) decode without extra structs.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a [`User`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    /// Accepts surrounding whitespace, since form values are not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(UserId)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

pub type PostId = u64;
pub type TodoId = u64;

/// A user in the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            name: None,
        }
    }

    /// Full name if known, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
