//! 할일 API 통합 테스트

mod common;

use axum::http::{Method, StatusCode};
use common::{create_note, register_user, request, sample_note, spawn_app};
use serde_json::json;

/// 할일이 붙은 노트를 만들고 그 할일의 id를 돌려받습니다.
async fn create_todo(app: &axum::Router, token: &str, title: &str) -> i64 {
    let mut payload = sample_note();
    payload["todos"] = json!([{ "title": title }]);
    let note = create_note(app, token, payload).await;
    note["todos"][0]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn auth_required_for_todos() {
    let app = spawn_app().await;

    let (status, _) = request(&app, Method::GET, "/api/v1/todos", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_todos_newest_first() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    create_todo(&app, &token, "Write 5 lines of...").await;
    create_todo(&app, &token, "Refactor the code").await;

    let (status, body) = request(&app, Method::GET, "/api/v1/todos", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let todos = body.as_array().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["title"], "Refactor the code");
    assert_eq!(todos[1]["title"], "Write 5 lines of...");
}

#[tokio::test]
async fn todos_limited_to_owner() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let other_token = register_user(&app, "user2@example.com").await;
    create_todo(&app, &other_token, "Clean setup").await;
    let todo_id = create_todo(&app, &token, "Read a book").await;

    let (status, body) = request(&app, Method::GET, "/api/v1/todos", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let todos = body.as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "Read a book");
    assert_eq!(todos[0]["id"].as_i64().unwrap(), todo_id);
}

#[tokio::test]
async fn direct_todo_create_not_allowed() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/todos",
        Some(&token),
        Some(json!({ "title": "Direct" })),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn update_todo_title() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let todo_id = create_todo(&app, &token, "Go workout").await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        &format!("/api/v1/todos/{todo_id}"),
        Some(&token),
        Some(json!({ "title": "Go running" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Go running");
}

#[tokio::test]
async fn other_users_todo_hidden() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let other_token = register_user(&app, "user2@example.com").await;
    let todo_id = create_todo(&app, &other_token, "Private task").await;

    let (status, _) = request(
        &app,
        Method::PATCH,
        &format!("/api/v1/todos/{todo_id}"),
        Some(&token),
        Some(json!({ "title": "Stolen" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_removes_it() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let todo_id = create_todo(&app, &token, "Done soon").await;

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/todos/{todo_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, todos) = request(&app, Method::GET, "/api/v1/todos", Some(&token), None).await;
    assert_eq!(todos.as_array().unwrap().len(), 0);
}
