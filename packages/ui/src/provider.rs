//! Shared app state and the fetches that keep it current.

use std::rc::Rc;

use api::Gateway;
use dioxus::prelude::*;
use store::SessionStore;

use crate::hub::Hub;

/// Session store handle shared through context.
pub type SharedSessionStore = Rc<dyn SessionStore>;

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `localStorage` under `key`
/// - **Native**: process memory, forgotten on exit
pub fn make_session_store(key: &str) -> SharedSessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageSession::with_key(key))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = key;
        Rc::new(store::MemorySessionStore::new())
    }
}

/// Get the shared application state.
pub fn use_hub() -> Signal<Hub> {
    use_context::<Signal<Hub>>()
}

/// Get the session store components persist login/logout through.
pub fn use_session_store() -> SharedSessionStore {
    use_context::<SharedSessionStore>()
}

/// Provide [`Hub`] and the session store to every component below.
///
/// The hub is seeded from `session_store`. On mount the user list is
/// fetched; every time the current user changes, that user's posts and todos
/// are fetched as two independent tasks tagged with a load ticket.
pub fn use_hub_provider<G>(gateway: G, session_store: SharedSessionStore) -> Signal<Hub>
where
    G: Gateway + Clone + 'static,
{
    let session_store = use_context_provider(|| session_store);
    let mut hub = use_context_provider(|| Signal::new(Hub::seeded(&*session_store)));

    let users_gateway = gateway.clone();
    let _users = use_resource(move || {
        let gateway = users_gateway.clone();
        async move {
            let result = gateway.list_users().await;
            hub.write().apply_user_list(result);
        }
    });

    // Only re-run the loader when the session itself changes, not on every
    // write to the hub (posts and todos landing included).
    let current_user = use_memo(move || hub.read().current_user().clone());

    use_effect(move || {
        if !current_user().is_logged_in() {
            return;
        }
        let Some(ticket) = hub.peek().load_ticket() else {
            return;
        };

        let posts_gateway = gateway.clone();
        spawn(async move {
            let result = posts_gateway.list_posts_by_user(ticket.user_id).await;
            hub.write().apply_posts(ticket, result);
        });

        let todos_gateway = gateway.clone();
        spawn(async move {
            let result = todos_gateway.list_todos_by_user(ticket.user_id).await;
            hub.write().apply_todos(ticket, result);
        });
    });

    hub
}
