use dioxus::prelude::*;
use ui::{Header, Page, PageView};

use crate::Route;

/// Header on top of whichever route matched.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            id: "App",
            Header {}
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { PageView { page: Page::Home } }
}

#[component]
pub fn Posts() -> Element {
    rsx! { PageView { page: Page::Posts } }
}

#[component]
pub fn Todos() -> Element {
    rsx! { PageView { page: Page::Todos } }
}

#[component]
pub fn Unmatched(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}, redirecting home", segments.join("/"));
    rsx! { PageView { page: Page::Unmatched } }
}
