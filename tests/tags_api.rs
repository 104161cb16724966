//! 태그 API 통합 테스트

mod common;

use axum::http::{Method, StatusCode};
use common::{create_note, register_user, request, sample_note, spawn_app};
use serde_json::json;

/// 태그가 붙은 노트를 만들고 그 태그의 id를 돌려받습니다.
async fn create_tag(app: &axum::Router, token: &str, name: &str) -> i64 {
    let mut payload = sample_note();
    payload["tags"] = json!([{ "name": name }]);
    let note = create_note(app, token, payload).await;
    note["tags"][0]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn auth_required_for_tags() {
    let app = spawn_app().await;

    let (status, _) = request(&app, Method::GET, "/api/v1/tags", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_tags_by_name_descending() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    create_tag(&app, &token, "Mathematics").await;
    create_tag(&app, &token, "Philosophy").await;

    let (status, body) = request(&app, Method::GET, "/api/v1/tags", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["name"], "Philosophy");
    assert_eq!(tags[1]["name"], "Mathematics");
}

#[tokio::test]
async fn tags_limited_to_owner() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let other_token = register_user(&app, "user2@example.com").await;
    create_tag(&app, &other_token, "Code").await;
    let tag_id = create_tag(&app, &token, "Back-end").await;

    let (status, body) = request(&app, Method::GET, "/api/v1/tags", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "Back-end");
    assert_eq!(tags[0]["id"].as_i64().unwrap(), tag_id);
}

#[tokio::test]
async fn direct_tag_create_not_allowed() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;

    // 태그는 노트의 중첩 경로로만 만들어집니다
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/tags",
        Some(&token),
        Some(json!({ "name": "Direct" })),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn update_tag_name() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let tag_id = create_tag(&app, &token, "Algorithms").await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        &format!("/api/v1/tags/{tag_id}"),
        Some(&token),
        Some(json!({ "name": "Data Structure" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Data Structure");
}

#[tokio::test]
async fn update_tag_to_taken_name_conflicts() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    create_tag(&app, &token, "Cloud").await;
    let tag_id = create_tag(&app, &token, "Database").await;

    let (status, _) = request(
        &app,
        Method::PATCH,
        &format!("/api/v1/tags/{tag_id}"),
        Some(&token),
        Some(json!({ "name": "Cloud" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn other_users_tag_hidden() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let other_token = register_user(&app, "user2@example.com").await;
    let tag_id = create_tag(&app, &other_token, "Code").await;

    let (status, _) = request(
        &app,
        Method::PATCH,
        &format!("/api/v1/tags/{tag_id}"),
        Some(&token),
        Some(json!({ "name": "Stolen" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/tags/{tag_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_tag_removes_it() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;
    let tag_id = create_tag(&app, &token, "Logic").await;

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/v1/tags/{tag_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, tags) = request(&app, Method::GET, "/api/v1/tags", Some(&token), None).await;
    assert_eq!(tags.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn assigned_only_filters_unused_tags() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;

    // "Cloud"는 노트에 연결된 채로, "Database"는 연결이 해제된 채로 둡니다
    let mut payload = sample_note();
    payload["tags"] = json!([{ "name": "Cloud" }, { "name": "Database" }]);
    let note = create_note(&app, &token, payload).await;
    let id = note["id"].as_i64().unwrap();
    request(
        &app,
        Method::PATCH,
        &format!("/api/v1/notes/{id}"),
        Some(&token),
        Some(json!({ "tags": [{ "name": "Cloud" }] })),
    )
    .await;

    let (status, body) = request(
        &app,
        Method::GET,
        "/api/v1/tags?assigned_only=1",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "Cloud");
}

#[tokio::test]
async fn assigned_only_returns_unique_rows() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;

    // 같은 태그를 두 노트에 연결합니다
    let mut p1 = sample_note();
    p1["tags"] = json!([{ "name": "Cloud" }]);
    create_note(&app, &token, p1).await;
    let mut p2 = sample_note();
    p2["tags"] = json!([{ "name": "Cloud" }]);
    create_note(&app, &token, p2).await;

    let (_, body) = request(
        &app,
        Method::GET,
        "/api/v1/tags?assigned_only=1",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(body.as_array().unwrap().len(), 1);
}
