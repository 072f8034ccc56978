use dioxus::prelude::*;

use crate::provider::{use_hub, use_session_store};
use crate::selector::Selector;
use crate::session::Session;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Page header: user picker and login when logged out, navigation and
/// logout when logged in.
#[component]
pub fn Header() -> Element {
    let mut hub = use_hub();
    let session_store = use_session_store();
    let mut selector = use_signal(Selector::default);

    let users = use_memo(move || hub.read().user_list().to_vec());

    // Pre-select the first user whenever the list arrives or changes.
    use_effect(move || {
        let users = users();
        selector.write().reset(&users);
    });

    let on_select = move |evt: FormEvent| {
        selector.write().select(&evt.value(), &users.read());
    };

    let login_store = session_store.clone();
    let on_login = move |_| {
        let Some(user) = selector.read().selected().cloned() else {
            tracing::warn!("Log in pressed with no user selected");
            return;
        };
        hub.write().login(&*login_store, user);
    };

    let on_logout = move |_| {
        selector.write().reset(&users.read());
        hub.write().logout(&*session_store);
    };

    let session = hub.read().current_user().clone();
    let options = users();

    let controls = match session {
        Session::LoggedIn(user) => rsx! {
            Link { to: "/posts", active_class: "current", "POSTS" }
            Link { to: "/todos", active_class: "current", "TODOS" }
            button {
                r#type: "button",
                onclick: on_logout,
                "LOG OUT, {user.username}"
            }
        },
        Session::LoggedOut => rsx! {
            select {
                onchange: on_select,
                for user in options {
                    option {
                        key: "{user.id}",
                        value: "{user.id}",
                        selected: selector.read().is_selected(user.id),
                        "{user.username}"
                    }
                }
            }
            button {
                r#type: "button",
                onclick: on_login,
                "LOG IN"
            }
        },
    };

    rsx! {
        document::Stylesheet { href: HEADER_CSS }

        header {
            h1 { "Welcome to UserHub" }
            form {
                class: "user-select",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                {controls}
            }
        }
    }
}
