//! 인증 API 통합 테스트

mod common;

use axum::http::{Method, StatusCode};
use common::{register_user, request, spawn_app};
use serde_json::json;

#[tokio::test]
async fn register_returns_user_and_tokens() {
    let app = spawn_app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": "user@example.com",
            "name": "Test User",
            "password": "testpass123"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "user@example.com");
    assert_eq!(body["user"]["name"], "Test User");
    assert_eq!(body["user"]["is_active"], true);
    assert_eq!(body["user"]["is_staff"], false);
    // 비밀번호 해시는 절대 응답에 나타나면 안 됩니다
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["access_token"].as_str().is_some());
    assert!(body["refresh_token"].as_str().is_some());
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = spawn_app().await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "email": "user@example.com", "password": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = spawn_app().await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "email": "not-an-email", "password": "testpass123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let app = spawn_app().await;
    register_user(&app, "user@example.com").await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "email": "user@example.com", "password": "testpass123" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_returns_tokens() {
    let app = spawn_app().await;
    register_user(&app, "user@example.com").await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "user@example.com", "password": "testpass123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some());
    assert!(body["refresh_token"].as_str().is_some());
}

#[tokio::test]
async fn login_wrong_password_unauthorized() {
    let app = spawn_app().await;
    register_user(&app, "user@example.com").await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "user@example.com", "password": "wrongpass" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_unknown_email_unauthorized() {
    let app = spawn_app().await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "ghost@example.com", "password": "testpass123" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = spawn_app().await;
    let token = register_user(&app, "user@example.com").await;

    let (status, body) = request(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "user@example.com");
}

#[tokio::test]
async fn me_requires_auth() {
    let app = spawn_app().await;

    let (status, _) = request(&app, Method::GET, "/api/v1/auth/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_rotates_tokens() {
    let app = spawn_app().await;

    let (_, registered) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": "user@example.com",
            "password": "testpass123"
        })),
    )
    .await;
    let refresh_token = registered["refresh_token"].as_str().unwrap().to_string();

    // 토큰 클레임의 iat가 초 단위라서, 같은 초 안에 재발급하면
    // 문자열까지 동일한 토큰이 나옵니다. 한 초 기다려 회전을 관찰합니다.
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refresh_token": refresh_token })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().is_some());

    // 회전된 뒤에는 이전 refresh 토큰을 다시 쓸 수 없습니다
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refresh_token": refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_revokes_refresh_tokens() {
    let app = spawn_app().await;

    let (_, registered) = request(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": "user@example.com",
            "password": "testpass123"
        })),
    )
    .await;
    let access_token = registered["access_token"].as_str().unwrap().to_string();
    let refresh_token = registered["refresh_token"].as_str().unwrap().to_string();

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/logout",
        Some(&access_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/v1/auth/refresh",
        None,
        Some(json!({ "refresh_token": refresh_token })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
