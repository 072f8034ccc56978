//! Which view a path shows for a given session.
//!
//! The router decides which [`Page`] matched; [`resolve`] decides what that
//! page renders. Keeping the decision a plain function makes both login
//! branches testable without a renderer.

use store::User;

use crate::session::Session;

/// The pages the app knows about. Anything else is `Unmatched`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Posts,
    Todos,
    Unmatched,
}

impl Page {
    /// Classify a location path. Query and fragment are ignored, matching is
    /// otherwise exact.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path {
            "" | "/" => Page::Home,
            "/posts" => Page::Posts,
            "/todos" => Page::Todos,
            _ => Page::Unmatched,
        }
    }

    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::Posts => Some("/posts"),
            Page::Todos => Some("/todos"),
            Page::Unmatched => None,
        }
    }
}

/// What to render.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Welcome(User),
    PleaseLogIn,
    Posts(User),
    Todos(User),
    RedirectHome,
}

pub fn resolve(page: Page, session: &Session) -> View {
    match (session, page) {
        (Session::LoggedIn(user), Page::Home) => View::Welcome(user.clone()),
        (Session::LoggedIn(user), Page::Posts) => View::Posts(user.clone()),
        (Session::LoggedIn(user), Page::Todos) => View::Todos(user.clone()),
        (Session::LoggedOut, Page::Home) => View::PleaseLogIn,
        (_, Page::Posts | Page::Todos | Page::Unmatched) => View::RedirectHome,
    }
}
