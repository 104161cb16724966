//! 통합 테스트 공용 헬퍼
//!
//! 인메모리 SQLite 풀 위에 라우터를 조립하고, tower의 `oneshot`으로
//! 프로세스 내에서 HTTP 요청을 흘려보냅니다.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use notebase::routes::notes::AppState;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// 인메모리 DB로 라우터를 만듭니다.
///
/// 연결을 1개로 제한하는 이유: `sqlite::memory:`는 연결마다 별도의
/// 데이터베이스가 되므로, 풀이 같은 연결을 재사용해야 합니다.
pub async fn spawn_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    notebase::app(AppState {
        pool,
        jwt_secret: "test-secret".to_string(),
    })
}

/// 요청 하나를 보내고 (상태 코드, JSON 본문)을 돌려받습니다.
/// 본문이 비어 있으면(204 등) `Value::Null`을 반환합니다.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// 회원가입을 거쳐 액세스 토큰을 돌려받습니다.
pub async fn register_user(app: &Router, email: &str) -> String {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": email,
            "name": "Test User",
            "password": "testpass123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");

    body["access_token"].as_str().unwrap().to_string()
}

/// 샘플 노트 생성 본문
pub fn sample_note() -> Value {
    json!({
        "title": "Sample note title",
        "description": "Sample description",
        "notation": "Sample notation",
        "ref": "http://reference.com/note.pdf"
    })
}

/// 노트를 생성하고 상세 응답을 돌려받습니다.
pub async fn create_note(app: &Router, token: &str, payload: Value) -> Value {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/v1/notes",
        Some(token),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create note failed: {body}");
    body
}
