//! # 노트 데이터베이스 쿼리 모듈
//!
//! `notes` 테이블과 세 관계 테이블(`note_tags`, `note_todos`, `note_links`)을
//! 다루는 쿼리 함수들입니다. 모든 읽기/쓰기는 요청자의 `user_id`로
//! 스코프됩니다.
//!
//! ## 쓰기 경로의 원자성
//! 노트 생성/수정은 스칼라 필드 변경과 중첩 컬렉션(태그/할일/링크)의
//! get-or-create + 관계 교체를 하나의 트랜잭션으로 묶습니다.
//! 중간에 실패하면 아무 것도 반영되지 않습니다.

use crate::db::{links, tags, todos};
use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 요청자의 노트 목록을 조회합니다. 최신순(id 내림차순)입니다.
///
/// `tag_filter`가 주어지면 그 중 하나 이상의 태그와 연결된 노트만
/// 반환합니다. 한 노트가 여러 필터 태그에 걸리더라도 `DISTINCT`로
/// 한 번만 나타납니다.
pub async fn list_notes(
    pool: &SqlitePool,
    user_id: &str,
    tag_filter: Option<&[i64]>,
) -> Result<Vec<Note>, AppError> {
    let notes = match tag_filter {
        Some(tag_ids) if !tag_ids.is_empty() => {
            // IN 절의 자리표시자를 필터 개수만큼 만들어 바인딩합니다.
            let placeholders = vec!["?"; tag_ids.len()].join(", ");
            let sql = format!(
                r#"
                SELECT DISTINCT n.id, n.user_id, n.title, n.description, n.notation,
                       n.ref, n.created_at, n.edited_at
                FROM notes n
                JOIN note_tags nt ON nt.note_id = n.id
                WHERE n.user_id = ? AND nt.tag_id IN ({placeholders})
                ORDER BY n.id DESC
                "#
            );

            let mut query = sqlx::query_as::<_, Note>(&sql).bind(user_id);
            for tag_id in tag_ids {
                query = query.bind(*tag_id);
            }
            query.fetch_all(pool).await?
        }
        Some(_) => Vec::new(),
        None => {
            sqlx::query_as::<_, Note>(
                r#"
                SELECT id, user_id, title, description, notation, ref, created_at, edited_at
                FROM notes
                WHERE user_id = ?
                ORDER BY id DESC
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(notes)
}

/// id로 요청자의 노트 하나를 조회합니다.
///
/// 다른 사용자의 노트는 조건에 걸리지 않으므로 `None`이 됩니다.
pub async fn get_note(pool: &SqlitePool, user_id: &str, id: i64) -> Result<Option<Note>, AppError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, user_id, title, description, notation, ref, created_at, edited_at
        FROM notes
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}

/// 새 노트를 생성하고 생성된 행을 반환합니다.
///
/// ## 처리 흐름 (전체가 하나의 트랜잭션)
/// 1. `notes` 행 삽입 — 소유자는 항상 요청자로 강제됩니다
/// 2. 중첩된 태그/할일/링크 각각을 (이름, 요청자)로 get-or-create
/// 3. 관계 테이블에 연결 행 삽입
pub async fn create_note(
    pool: &SqlitePool,
    user_id: &str,
    req: &CreateNoteRequest,
) -> Result<Note, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO notes (user_id, title, description, notation, ref)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.notation)
    .bind(&req.reference)
    .execute(&mut *tx)
    .await?;
    let note_id = result.last_insert_rowid();

    for tag in &req.tags {
        let tag_id = tags::get_or_create_tag(&mut tx, user_id, &tag.name).await?;
        tags::add_tag_to_note(&mut tx, note_id, tag_id).await?;
    }
    for todo in &req.todos {
        let todo_id = todos::get_or_create_todo(&mut tx, user_id, &todo.title).await?;
        todos::add_todo_to_note(&mut tx, note_id, todo_id).await?;
    }
    for link in &req.links {
        let link_id = links::get_or_create_link(&mut tx, user_id, &link.name).await?;
        links::add_link_to_note(&mut tx, note_id, link_id).await?;
    }

    tx.commit().await?;

    get_note(pool, user_id, note_id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created note".to_string()))
}

/// 노트를 부분 업데이트합니다.
///
/// 요청에 포함된 스칼라 필드만 변경합니다. 중첩 배열 키가 존재하면
/// (빈 배열이어도) 해당 종류의 연관 관계를 통째로 교체하고,
/// 키가 없으면 기존 관계를 그대로 둡니다.
/// 성공한 업데이트마다 `edited_at`이 갱신됩니다.
///
/// ## 반환값
/// - `Ok(Some(Note))`: 업데이트 성공
/// - `Ok(None)`: 해당 id의 노트가 없거나 요청자의 소유가 아님
pub async fn update_note(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    req: &UpdateNoteRequest,
) -> Result<Option<Note>, AppError> {
    // 먼저 소유권 스코프 안에서 존재 여부를 확인합니다
    if get_note(pool, user_id, id).await?.is_none() {
        return Ok(None); // 404 처리를 라우트 핸들러에 위임
    }

    let mut tx = pool.begin().await?;

    // 각 필드를 개별 쿼리로 업데이트합니다
    if let Some(title) = &req.title {
        sqlx::query("UPDATE notes SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(description) = &req.description {
        sqlx::query("UPDATE notes SET description = ? WHERE id = ?")
            .bind(description)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(notation) = &req.notation {
        sqlx::query("UPDATE notes SET notation = ? WHERE id = ?")
            .bind(notation)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }
    if let Some(reference) = &req.reference {
        sqlx::query("UPDATE notes SET ref = ? WHERE id = ?")
            .bind(reference)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    // 중첩 배열: 키가 있으면 기존 관계를 비우고 새 집합으로 교체
    if let Some(tag_payloads) = &req.tags {
        tags::clear_note_tags(&mut tx, id).await?;
        for tag in tag_payloads {
            let tag_id = tags::get_or_create_tag(&mut tx, user_id, &tag.name).await?;
            tags::add_tag_to_note(&mut tx, id, tag_id).await?;
        }
    }
    if let Some(todo_payloads) = &req.todos {
        todos::clear_note_todos(&mut tx, id).await?;
        for todo in todo_payloads {
            let todo_id = todos::get_or_create_todo(&mut tx, user_id, &todo.title).await?;
            todos::add_todo_to_note(&mut tx, id, todo_id).await?;
        }
    }
    if let Some(link_payloads) = &req.links {
        links::clear_note_links(&mut tx, id).await?;
        for link in link_payloads {
            let link_id = links::get_or_create_link(&mut tx, user_id, &link.name).await?;
            links::add_link_to_note(&mut tx, id, link_id).await?;
        }
    }

    // 수정이 성공할 때마다 edited_at을 밀리초 정밀도로 갱신합니다
    sqlx::query("UPDATE notes SET edited_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    get_note(pool, user_id, id).await
}

/// 요청자의 노트를 삭제합니다.
///
/// 관계 테이블 행은 `ON DELETE CASCADE`로 함께 삭제됩니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 id의 노트가 없거나 요청자의 소유가 아님
pub async fn delete_note(pool: &SqlitePool, user_id: &str, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
