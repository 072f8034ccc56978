use dioxus::prelude::*;
use store::{Post, User};

/// The logged-in user's posts.
#[component]
pub fn UserPosts(user: User, posts: Vec<Post>) -> Element {
    rsx! {
        div {
            class: "user-posts",
            h2 { "Posts By {user.display_name()}" }
            if posts.is_empty() {
                p { class: "empty", "No posts yet." }
            }
            for post in posts.iter() {
                div {
                    key: "{post.id}",
                    class: "post",
                    h3 { "{post.title}" }
                    p { "{post.body}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserId;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            user_id: UserId(2),
            title: title.to_string(),
            body: format!("body of {id}"),
        }
    }

    #[test]
    fn renders_one_entry_per_post() {
        let html = dioxus_ssr::render_element(rsx! {
            UserPosts { user: User::new(2, "bob"), posts: vec![post(10, "hi")] }
        });

        assert_eq!(html.matches(r#"class="post""#).count(), 1);
        assert!(html.contains("hi</h3>"));
        assert!(html.contains("body of 10"));
        assert!(!html.contains("No posts yet."));
    }

    #[test]
    fn heading_prefers_full_name() {
        let mut user = User::new(2, "bob");
        user.name = Some("Bob Marley".to_string());

        let html = dioxus_ssr::render_element(rsx! {
            UserPosts { user: user, posts: Vec::new() }
        });

        assert!(html.contains("Posts By Bob Marley"));
        assert!(html.contains("No posts yet."));
        assert_eq!(html.matches(r#"class="post""#).count(), 0);
    }
}
