//! # 태그 라우트 핸들러
//!
//! 태그 목록/수정/삭제를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/tags | `list_tags` | 요청자의 태그 목록 (`?assigned_only=1` 필터) |
//! | PATCH | /api/v1/tags/{id} | `update_tag` | 태그 이름 수정 |
//! | DELETE | /api/v1/tags/{id} | `delete_tag` | 태그 삭제 |
//!
//! 생성 엔드포인트는 의도적으로 없습니다. 태그는 노트 쓰기 요청의
//! 중첩 배열을 통해서만 만들어집니다.

use crate::{
    db,
    error::{AppError, AppJson},
    middleware::auth::AuthUser,
    models::*,
    routes::notes::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// 태그/링크 목록 공용 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct AssignedOnlyParams {
    /// 1이면 노트에 연결된 행만 반환 (기본값 0)
    pub assigned_only: Option<u8>,
}

/// `GET /tags` — 요청자의 태그 목록을 이름 내림차순으로 조회합니다.
pub async fn list_tags(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<AssignedOnlyParams>,
) -> Result<Json<Vec<Tag>>, AppError> {
    let assigned_only = params.assigned_only.unwrap_or(0) != 0;
    let tags = db::list_tags(&state.pool, &user.user_id, assigned_only).await?;
    Ok(Json(tags))
}

/// `PATCH /tags/{id}` — 태그 이름을 수정합니다.
pub async fn update_tag(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    AppJson(req): AppJson<UpdateTagRequest>,
) -> Result<Json<Tag>, AppError> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("name may not be blank".to_string()));
        }
        if name.chars().count() > TAG_NAME_MAX {
            return Err(AppError::BadRequest(format!(
                "name must be at most {TAG_NAME_MAX} characters"
            )));
        }
    }

    let tag = db::update_tag(&state.pool, &user.user_id, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(tag))
}

/// `DELETE /tags/{id}` — 태그를 삭제합니다. 성공 시 `204 No Content`.
pub async fn delete_tag(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_tag(&state.pool, &user.user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
