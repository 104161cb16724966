//! # 노트 라우트 핸들러
//!
//! 노트의 CRUD와 목록 필터링을 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET    /api/v1/notes`        → 노트 목록 (요약 형태, `?tags=1,2` 필터)
//! - `POST   /api/v1/notes`        → 새 노트 생성 (중첩 태그/할일/링크 포함)
//! - `GET    /api/v1/notes/{id}`   → 단일 노트 조회 (상세 형태)
//! - `PATCH  /api/v1/notes/{id}`   → 노트 수정 (부분 업데이트)
//! - `PUT    /api/v1/notes/{id}`   → 노트 수정 (같은 핸들러)
//! - `DELETE /api/v1/notes/{id}`   → 노트 삭제
//!
//! ## Axum 핸들러 패턴
//! 각 함수는 Axum의 **추출자(Extractor)** 패턴을 따릅니다:
//! - `State(state)`: 애플리케이션 공유 상태 (DB 풀 등)
//! - `user: AuthUser`: 인증된 사용자 — 토큰이 없으면 401로 거절됩니다
//! - `Path(id)`: URL 경로의 변수 (`{id}` 부분)
//! - `Query(params)`: 쿼리 문자열 파라미터
//! - `AppJson(req)`: 요청 본문을 구조체로 파싱 (파싱 실패는 400)

use crate::{
    db,
    error::{AppError, AppJson},
    middleware::auth::AuthUser,
    models::*,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    /// JWT 토큰 서명용 비밀키
    pub jwt_secret: String,
}

/// 노트 목록 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct ListNotesParams {
    /// 쉼표로 구분된 태그 id 목록 (예: "1,2")
    pub tags: Option<String>,
}

/// `"1, 2"` 같은 쉼표 구분 문자열을 id 목록으로 파싱합니다.
fn parse_tag_filter(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            AppError::BadRequest("tags must be a comma-separated list of ids".to_string())
        })
}

/// 필수 텍스트 필드 검사 — 비어 있으면 400.
fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} may not be blank")));
    }
    Ok(())
}

/// 길이 제한 검사 (유니코드 문자 수 기준) — 초과하면 400.
fn limit(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// 중첩된 태그/할일/링크 배열의 이름 필드를 검사합니다.
fn validate_nested(
    tags: &[TagPayload],
    todos: &[TodoPayload],
    links: &[LinkPayload],
) -> Result<(), AppError> {
    for tag in tags {
        require("tag name", &tag.name)?;
        limit("tag name", &tag.name, TAG_NAME_MAX)?;
    }
    for todo in todos {
        require("todo title", &todo.title)?;
        limit("todo title", &todo.title, TODO_TITLE_MAX)?;
    }
    for link in links {
        require("link name", &link.name)?;
        limit("link name", &link.name, LINK_NAME_MAX)?;
    }
    Ok(())
}

/// 노트 행에 세 중첩 컬렉션을 붙여 상세 응답을 만듭니다.
async fn load_detail(pool: &SqlitePool, note: Note) -> Result<NoteDetail, AppError> {
    let tags = db::get_note_tags(pool, note.id).await?;
    let todos = db::get_note_todos(pool, note.id).await?;
    let links = db::get_note_links(pool, note.id).await?;
    Ok(NoteDetail::from_parts(note, tags, todos, links))
}

/// `GET /notes` — 요청자의 노트 목록을 조회합니다.
///
/// `?tags=1,2`가 있으면 그 태그 중 하나 이상과 연결된 노트만 반환합니다.
/// 목록은 요약 형태이므로 `description`/`notation`이 빠져 있습니다.
pub async fn list_notes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListNotesParams>,
) -> Result<Json<Vec<NoteSummary>>, AppError> {
    let tag_filter = match params.tags.as_deref() {
        Some(raw) => Some(parse_tag_filter(raw)?),
        None => None,
    };

    let notes = db::list_notes(&state.pool, &user.user_id, tag_filter.as_deref()).await?;

    let mut summaries = Vec::with_capacity(notes.len());
    for note in notes {
        let tags = db::get_note_tags(&state.pool, note.id).await?;
        let todos = db::get_note_todos(&state.pool, note.id).await?;
        let links = db::get_note_links(&state.pool, note.id).await?;
        summaries.push(NoteSummary::from_parts(note, tags, todos, links));
    }

    Ok(Json(summaries))
}

/// `GET /notes/{id}` — 단일 노트를 상세 형태로 조회합니다.
pub async fn get_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<NoteDetail>, AppError> {
    let note = db::get_note(&state.pool, &user.user_id, id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(load_detail(&state.pool, note).await?))
}

/// `POST /notes` — 새 노트를 생성합니다.
///
/// 소유자는 항상 요청자입니다. 본문에 소유자 필드를 넣어도 무시됩니다.
/// 중첩된 태그/할일/링크는 (이름, 요청자)로 get-or-create 후 연결됩니다.
/// 성공 시 `201 Created`와 상세 표현을 반환합니다.
pub async fn create_note(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(req): AppJson<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteDetail>), AppError> {
    require("title", &req.title)?;
    limit("title", &req.title, NOTE_TITLE_MAX)?;
    require("description", &req.description)?;
    limit("description", &req.description, NOTE_DESCRIPTION_MAX)?;
    limit("ref", &req.reference, NOTE_REF_MAX)?;
    validate_nested(&req.tags, &req.todos, &req.links)?;

    let note = db::create_note(&state.pool, &user.user_id, &req).await?;
    let detail = load_detail(&state.pool, note).await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// `PATCH`/`PUT /notes/{id}` — 노트를 수정합니다.
///
/// 본문에 포함된 필드만 변경합니다. 중첩 배열 키가 있으면 해당 종류의
/// 연관 관계가 통째로 교체되고(빈 배열이면 전부 해제), 키가 없으면
/// 그대로 유지됩니다.
pub async fn update_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    AppJson(req): AppJson<UpdateNoteRequest>,
) -> Result<Json<NoteDetail>, AppError> {
    if let Some(title) = &req.title {
        require("title", title)?;
        limit("title", title, NOTE_TITLE_MAX)?;
    }
    if let Some(description) = &req.description {
        require("description", description)?;
        limit("description", description, NOTE_DESCRIPTION_MAX)?;
    }
    if let Some(reference) = &req.reference {
        limit("ref", reference, NOTE_REF_MAX)?;
    }
    validate_nested(
        req.tags.as_deref().unwrap_or(&[]),
        req.todos.as_deref().unwrap_or(&[]),
        req.links.as_deref().unwrap_or(&[]),
    )?;

    let note = db::update_note(&state.pool, &user.user_id, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(load_detail(&state.pool, note).await?))
}

/// `DELETE /notes/{id}` — 노트를 삭제합니다.
///
/// 성공 시 본문 없이 `204 No Content`를 반환합니다.
/// 없는 노트든 남의 노트든 똑같이 404입니다.
pub async fn delete_note(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_note(&state.pool, &user.user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
