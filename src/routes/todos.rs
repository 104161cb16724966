//! # 할일 라우트 핸들러
//!
//! 할일 목록/수정/삭제 핸들러입니다. 생성 엔드포인트는 없습니다 —
//! 할일은 노트 쓰기 요청의 중첩 배열을 통해서만 만들어집니다.

use crate::{
    db,
    error::{AppError, AppJson},
    middleware::auth::AuthUser,
    models::*,
    routes::notes::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// `GET /todos` — 요청자의 할일 목록을 최신순으로 조회합니다.
pub async fn list_todos(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = db::list_todos(&state.pool, &user.user_id).await?;
    Ok(Json(todos))
}

/// `PATCH /todos/{id}` — 할일 제목을 수정합니다.
pub async fn update_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    AppJson(req): AppJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("title may not be blank".to_string()));
        }
        if title.chars().count() > TODO_TITLE_MAX {
            return Err(AppError::BadRequest(format!(
                "title must be at most {TODO_TITLE_MAX} characters"
            )));
        }
    }

    let todo = db::update_todo(&state.pool, &user.user_id, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

/// `DELETE /todos/{id}` — 할일을 삭제합니다. 성공 시 `204 No Content`.
pub async fn delete_todo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_todo(&state.pool, &user.user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
