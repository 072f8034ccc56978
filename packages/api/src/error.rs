//! The one error every gateway read can fail with.
//!
//! Transport failures, non-2xx statuses and undecodable bodies all collapse
//! into [`FetchError`]. The UI never branches on the cause; it only logs it.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("fetch {url} failed: {message}")]
pub struct FetchError {
    /// The URL that was requested.
    pub url: String,
    /// Human-readable cause.
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, message: impl ToString) -> Self {
        Self {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
