pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageSession;

pub use config::HubConfig;
pub use models::{Post, PostId, Todo, TodoId, User, UserId};
pub use session::SessionStore;
