//! # notebase 라이브러리 루트
//!
//! 모듈 트리 선언과 API 라우터 조립을 담당합니다.
//! 라우터 조립을 라이브러리로 분리한 이유: 바이너리(main.rs)와
//! 통합 테스트(tests/)가 같은 라우터를 공유하기 위해서입니다.
//!
//! 모듈 구성:
//! - `config`: 환경변수 기반 설정
//! - `db`: 데이터베이스 접근 계층 (소유권 스코프 쿼리)
//! - `error`: 에러 타입과 HTTP 응답 변환
//! - `middleware`: 인증 추출자와 토큰 유틸리티
//! - `models`: 데이터 구조체 (행, 요청, 응답)
//! - `routes`: HTTP 핸들러

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use axum::{
    routing::{get, patch, post},
    Router,
};
use routes::{notes::AppState, *};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// API 라우터를 조립합니다.
///
/// 모든 API 라우트는 `/api/v1` 아래에 중첩됩니다.
/// 리소스 컬렉션에 정의되지 않은 메서드(예: `POST /tags`)는
/// Axum이 405 Method Not Allowed로 응답합니다 — 태그/할일/링크는
/// 노트의 중첩 경로를 통해서만 생성됩니다.
pub fn app(state: AppState) -> Router {
    // 인증 관련 라우트 (회원가입, 로그인, 토큰 갱신, 로그아웃, 내 정보)
    let auth_routes = Router::new()
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/auth/me", get(routes::auth::me));

    let api_routes = Router::new()
        .merge(auth_routes)
        // 노트 CRUD — PUT과 PATCH 모두 같은 수정 핸들러에 매핑됩니다
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note)
                .patch(update_note)
                .put(update_note)
                .delete(delete_note),
        )
        // 태그/할일/링크 — 목록, 수정, 삭제만 (직접 생성 없음)
        .route("/tags", get(list_tags))
        .route("/tags/{id}", patch(update_tag).delete(delete_tag))
        .route("/todos", get(list_todos))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .route("/links", get(list_links))
        .route("/links/{id}", patch(update_link).delete(delete_link))
        // 헬스체크 (인증 불필요)
        .route("/health", get(health_check))
        .with_state(state);

    // CORS: 개발 환경에서는 모든 출처를 허용합니다
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
