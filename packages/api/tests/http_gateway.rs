//! HttpGateway against an in-process directory API.
//!
//! Starts an axum server on a random port serving a tiny users/posts/todos
//! dataset, then drives every gateway read over real HTTP.

use std::net::SocketAddr;

use api::{Gateway, HttpGateway, UserId};
use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

fn directory() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}/posts", get(list_posts))
        .route("/users/{id}/todos", get(list_todos))
        .route("/broken/users", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/garbled/users", get(|| async { Json(json!({ "not": "a list" })) }))
}

async fn list_users() -> Json<Value> {
    Json(json!([
        { "id": 1, "username": "alice", "name": "Alice Liddell", "phone": "555-0100" },
        { "id": 2, "username": "bob" }
    ]))
}

async fn list_posts(Path(id): Path<u64>) -> Json<Value> {
    let all = [
        json!({ "id": 10, "userId": 2, "title": "hi", "body": "first post" }),
        json!({ "id": 11, "userId": 1, "title": "hello", "body": "" }),
    ];
    Json(Value::Array(
        all.into_iter().filter(|p| p["userId"] == id).collect(),
    ))
}

async fn list_todos(Path(id): Path<u64>) -> Json<Value> {
    Json(json!([
        { "id": 100, "userId": id, "title": "water plants", "completed": false },
        { "id": 101, "userId": id, "title": "file taxes", "completed": true }
    ]))
}

async fn spawn_directory() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, directory()).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn lists_users() {
    let addr = spawn_directory().await;
    let gateway = HttpGateway::new(&format!("http://{addr}/"));

    let users = gateway.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[0].username, "alice");
    assert_eq!(users[0].display_name(), "Alice Liddell");
    assert_eq!(users[1].username, "bob");
}

#[tokio::test]
async fn lists_posts_for_one_user() {
    let addr = spawn_directory().await;
    let gateway = HttpGateway::new(&format!("http://{addr}"));

    let posts = gateway.list_posts_by_user(UserId(2)).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 10);
    assert_eq!(posts[0].user_id, UserId(2));
    assert_eq!(posts[0].title, "hi");
    assert_eq!(posts[0].body, "first post");
}

#[tokio::test]
async fn lists_todos_for_one_user() {
    let addr = spawn_directory().await;
    let gateway = HttpGateway::new(&format!("http://{addr}"));

    let todos = gateway.list_todos_by_user(UserId(3)).await.unwrap();

    assert_eq!(todos.len(), 2);
    assert!(todos.iter().all(|t| t.user_id == UserId(3)));
    assert_eq!(todos.iter().filter(|t| t.completed).count(), 1);
}

#[tokio::test]
async fn server_error_is_a_fetch_error() {
    let addr = spawn_directory().await;
    let gateway = HttpGateway::new(&format!("http://{addr}/broken"));

    let err = gateway.list_users().await.unwrap_err();

    assert_eq!(err.url, format!("http://{addr}/broken/users"));
    assert!(err.message.contains("500"), "unexpected message: {}", err.message);
}

#[tokio::test]
async fn unexpected_body_is_a_fetch_error() {
    let addr = spawn_directory().await;
    let gateway = HttpGateway::new(&format!("http://{addr}/garbled"));

    let err = gateway.list_users().await.unwrap_err();

    assert!(err.message.starts_with("invalid response body"));
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let gateway = HttpGateway::new(&format!("http://{addr}"));

    let err = gateway.list_todos_by_user(UserId(1)).await.unwrap_err();

    assert_eq!(err.url, format!("http://{addr}/users/1/todos"));
}
