use dioxus::prelude::*;

use crate::posts::UserPosts;
use crate::provider::use_hub;
use crate::routes::{resolve, Page, View};
use crate::todos::UserTodos;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Renders whatever `page` shows for the current session, redirecting to
/// `/` when it shows nothing.
#[component]
pub fn PageView(page: Page) -> Element {
    let hub = use_hub();
    let nav = use_navigator();
    let state = hub.read();

    let view = match resolve(page, state.current_user()) {
        View::Welcome(user) => rsx! {
            h2 { class: "greeting", "Welcome, {user.username}!" }
        },
        View::PleaseLogIn => rsx! {
            h2 { class: "greeting", "Please log in, above." }
        },
        View::Posts(user) => rsx! {
            UserPosts { user: user, posts: state.user_posts().to_vec() }
        },
        View::Todos(user) => rsx! {
            UserTodos { user: user, todos: state.user_todos().to_vec() }
        },
        View::RedirectHome => {
            nav.replace("/");
            rsx! {}
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        {view}
    }
}
