//! Shared UI for UserHub: app state, the header and the routed views.

mod session;
pub use session::Session;

mod hub;
pub use hub::{Hub, LoadTicket};

mod selector;
pub use selector::Selector;

pub mod routes;
pub use routes::{resolve, Page, View};

mod provider;
pub use provider::{
    make_session_store, use_hub, use_hub_provider, use_session_store, SharedSessionStore,
};

mod header;
pub use header::Header;

mod posts;
pub use posts::UserPosts;

mod todos;
pub use todos::{completed_count, UserTodos};

mod page_view;
pub use page_view::PageView;

#[cfg(test)]
mod testing;
