use store::{User, UserId};

/// The header dropdown's current choice.
///
/// Defaults to the first user of the list whenever the list changes. The
/// dropdown reports its value as text; it is parsed into a [`UserId`] before
/// looking the user up, so `"2"` and `2` can never disagree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selector {
    selected: Option<User>,
}

impl Selector {
    /// Select the first user of `users` (nothing if it is empty).
    pub fn reset(&mut self, users: &[User]) {
        self.selected = users.first().cloned();
    }

    /// Select the user whose id matches the dropdown `value`.
    ///
    /// A value that is not a number or matches nobody clears the selection.
    pub fn select(&mut self, value: &str, users: &[User]) {
        self.selected = value
            .parse::<UserId>()
            .ok()
            .and_then(|id| users.iter().find(|user| user.id == id))
            .cloned();
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: UserId) -> bool {
        self.selected.as_ref().is_some_and(|user| user.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::Hub;
    use crate::session::Session;
    use api::{FixtureGateway, Gateway};
    use store::{MemorySessionStore, SessionStore};

    fn users() -> Vec<User> {
        vec![User::new(1, "alice"), User::new(2, "bob")]
    }

    #[test]
    fn defaults_to_first_user() {
        let mut selector = Selector::default();
        assert!(selector.selected().is_none());

        selector.reset(&users());

        assert_eq!(selector.selected(), Some(&User::new(1, "alice")));
        assert!(selector.is_selected(UserId(1)));
        assert!(!selector.is_selected(UserId(2)));
    }

    #[test]
    fn reset_follows_a_new_list() {
        let mut selector = Selector::default();
        selector.reset(&users());
        selector.select("2", &users());

        selector.reset(&[User::new(7, "gus")]);

        assert_eq!(selector.selected().map(|u| u.id), Some(UserId(7)));
    }

    #[test]
    fn empty_list_selects_nothing() {
        let mut selector = Selector::default();
        selector.reset(&[]);
        assert!(selector.selected().is_none());
    }

    #[test]
    fn select_parses_textual_ids() {
        let mut selector = Selector::default();
        selector.select("2", &users());
        assert_eq!(selector.selected(), Some(&User::new(2, "bob")));

        selector.select("3", &users());
        assert!(selector.selected().is_none());

        selector.select("bob", &users());
        assert!(selector.selected().is_none());
    }

    #[tokio::test]
    async fn pick_bob_and_log_in() {
        let gateway = FixtureGateway::new().with_users(users());
        let store = MemorySessionStore::new();
        let mut hub = Hub::seeded(&store);
        let mut selector = Selector::default();

        hub.apply_user_list(gateway.list_users().await);
        selector.reset(hub.user_list());
        assert_eq!(selector.selected().map(|u| u.username.as_str()), Some("alice"));

        selector.select("2", hub.user_list());
        let chosen = selector.selected().cloned().unwrap();
        hub.login(&store, chosen);

        assert_eq!(hub.current_user(), &Session::LoggedIn(User::new(2, "bob")));
        assert_eq!(store.load(), Some(User::new(2, "bob")));
    }

    #[test]
    fn logout_resets_selection_every_time() {
        let store = MemorySessionStore::new();
        let mut hub = Hub::default();
        hub.apply_user_list(Ok(users()));
        let mut selector = Selector::default();
        selector.select("2", hub.user_list());
        hub.login(&store, User::new(2, "bob"));

        for _ in 0..2 {
            selector.reset(hub.user_list());
            hub.logout(&store);

            assert!(selector.is_selected(UserId(1)));
            assert_eq!(hub.current_user(), &Session::LoggedOut);
            assert!(store.load().is_none());
        }
    }
}
