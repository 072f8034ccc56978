//! # Application configuration — `userhub.toml`
//!
//! Defines the TOML configuration the web binary embeds at build time
//! (filename: [`HubConfig::filename`] = `"userhub.toml"`). It decides where the
//! directory API lives and under which key the session is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//!
//! [session]
//! storage_key = "currentUser"
//! ```
//!
//! Every field has a serde default, so a missing section or an empty file is
//! equivalent to [`HubConfig::default`].

use serde::Deserialize;

use crate::session::DEFAULT_SESSION_KEY;

/// Top-level configuration stored in `userhub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Directory API settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/users`, `/users/{id}/posts` and `/users/{id}/todos`
    /// paths are appended to. A trailing slash is tolerated.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Browser storage key holding the logged-in user.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl HubConfig {
    /// Name of the file the web binary embeds.
    pub fn filename() -> &'static str {
        "userhub.toml"
    }

    /// Read a `userhub.toml` document. Missing keys take their defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
