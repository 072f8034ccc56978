use dioxus::prelude::*;
use store::{Todo, User};

/// How many of `todos` are done.
pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

/// The logged-in user's to-do list.
#[component]
pub fn UserTodos(user: User, todos: Vec<Todo>) -> Element {
    let done = completed_count(&todos);
    let total = todos.len();

    rsx! {
        div {
            class: "user-todos",
            h2 { "Todos For {user.display_name()}" }
            p { class: "summary", "{done} of {total} completed" }
            ul {
                for todo in todos {
                    li {
                        key: "{todo.id}",
                        class: if todo.completed { "todo complete" } else { "todo" },
                        span { class: "marker", if todo.completed { "✔" } else { "○" } }
                        "{todo.title}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserId;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            user_id: UserId(1),
            title: format!("task {id}"),
            completed,
        }
    }

    #[test]
    fn counts_completed() {
        assert_eq!(completed_count(&[]), 0);
        assert_eq!(completed_count(&[todo(1, true), todo(2, false), todo(3, true)]), 2);
    }

    #[test]
    fn renders_summary_and_markers() {
        let html = dioxus_ssr::render_element(rsx! {
            UserTodos { user: User::new(1, "alice"), todos: vec![todo(1, true), todo(2, false)] }
        });

        assert!(html.contains("Todos For alice"));
        assert!(html.contains("1 of 2 completed"));
        assert_eq!(html.matches(r#"class="todo complete""#).count(), 1);
        assert_eq!(html.matches(r#"class="todo""#).count(), 1);
    }
}
