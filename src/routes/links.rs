//! # 참조 링크 라우트 핸들러
//!
//! 링크 목록/수정/삭제 핸들러입니다. 태그와 같은 모양이며
//! `?assigned_only=1` 필터를 지원합니다. 생성 엔드포인트는 없습니다.

use crate::{
    db,
    error::{AppError, AppJson},
    middleware::auth::AuthUser,
    models::*,
    routes::notes::AppState,
};
use crate::routes::tags::AssignedOnlyParams;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

/// `GET /links` — 요청자의 링크 목록을 이름 내림차순으로 조회합니다.
pub async fn list_links(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<AssignedOnlyParams>,
) -> Result<Json<Vec<Link>>, AppError> {
    let assigned_only = params.assigned_only.unwrap_or(0) != 0;
    let links = db::list_links(&state.pool, &user.user_id, assigned_only).await?;
    Ok(Json(links))
}

/// `PATCH /links/{id}` — 링크 이름을 수정합니다.
pub async fn update_link(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    AppJson(req): AppJson<UpdateLinkRequest>,
) -> Result<Json<Link>, AppError> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("name may not be blank".to_string()));
        }
        if name.chars().count() > LINK_NAME_MAX {
            return Err(AppError::BadRequest(format!(
                "name must be at most {LINK_NAME_MAX} characters"
            )));
        }
    }

    let link = db::update_link(&state.pool, &user.user_id, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(link))
}

/// `DELETE /links/{id}` — 링크를 삭제합니다. 성공 시 `204 No Content`.
pub async fn delete_link(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_link(&state.pool, &user.user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
