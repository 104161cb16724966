//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 조회/수정/삭제와 노트-태그 관계를 관리하는 SQL 쿼리 함수들입니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, user_id, name) — (user_id, name) 유니크
//! - `note_tags`: 노트와 태그의 다대다(N:M) 관계 테이블
//!
//! 태그 삽입은 `get_or_create_tag` 하나뿐입니다. 태그는 노트 쓰기 요청의
//! 중첩 배열을 통해서만 만들어지기 때문입니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteConnection, SqlitePool};

/// 요청자의 태그를 이름 내림차순으로 조회합니다.
///
/// `assigned_only`가 참이면 최소 한 개의 노트에 연결된 태그만 반환합니다.
/// 여러 노트에 연결된 태그도 `DISTINCT`로 한 번만 나타납니다.
pub async fn list_tags(
    pool: &SqlitePool,
    user_id: &str,
    assigned_only: bool,
) -> Result<Vec<Tag>, AppError> {
    let tags = if assigned_only {
        sqlx::query_as::<_, Tag>(
            r#"
            SELECT DISTINCT t.id, t.name
            FROM tags t
            JOIN note_tags nt ON nt.tag_id = t.id
            WHERE t.user_id = ?
            ORDER BY t.name DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Tag>(
            "SELECT id, name FROM tags WHERE user_id = ? ORDER BY name DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?
    };

    Ok(tags)
}

/// id로 요청자의 태그 하나를 조회합니다.
pub async fn get_tag(pool: &SqlitePool, user_id: &str, id: i64) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>(
        "SELECT id, name FROM tags WHERE id = ? AND user_id = ?",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(tag)
}

/// 태그 이름을 수정합니다.
///
/// ## 반환값
/// - `Ok(Some(Tag))`: 업데이트 성공
/// - `Ok(None)`: 해당 id의 태그가 없거나 요청자의 소유가 아님
/// - `Err(Conflict)`: 같은 사용자의 다른 태그가 이미 그 이름을 사용 중
pub async fn update_tag(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    req: &UpdateTagRequest,
) -> Result<Option<Tag>, AppError> {
    if get_tag(pool, user_id, id).await?.is_none() {
        return Ok(None);
    }

    if let Some(name) = &req.name {
        // (user_id, name) 유니크 제약과의 충돌을 먼저 확인합니다
        let taken = sqlx::query_as::<_, (i64,)>(
            "SELECT id FROM tags WHERE user_id = ? AND name = ? AND id != ?",
        )
        .bind(user_id)
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        if taken.is_some() {
            return Err(AppError::Conflict("Tag name already in use".to_string()));
        }

        sqlx::query("UPDATE tags SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(pool)
            .await?;
    }

    get_tag(pool, user_id, id).await
}

/// 요청자의 태그를 삭제합니다.
///
/// `note_tags`에 `ON DELETE CASCADE`가 설정되어 있으므로
/// 노트와의 관계도 자동으로 삭제됩니다.
pub async fn delete_tag(pool: &SqlitePool, user_id: &str, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM tags WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// (이름, 요청자) 쌍으로 태그를 찾고, 없으면 새로 만듭니다.
///
/// 노트 쓰기 트랜잭션 안에서 호출되므로 `SqliteConnection`을 받습니다.
/// 같은 쌍으로 몇 번을 호출해도 행은 하나만 존재합니다(멱등).
pub async fn get_or_create_tag(
    conn: &mut SqliteConnection,
    user_id: &str,
    name: &str,
) -> Result<i64, AppError> {
    let existing = sqlx::query_as::<_, (i64,)>(
        "SELECT id FROM tags WHERE user_id = ? AND name = ?",
    )
    .bind(user_id)
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let result = sqlx::query("INSERT INTO tags (user_id, name) VALUES (?, ?)")
        .bind(user_id)
        .bind(name)
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// 노트에 태그를 연결합니다 (다대다 관계 추가).
///
/// `INSERT OR IGNORE`: 이미 같은 (note_id, tag_id) 조합이 있으면
/// 에러 없이 무시합니다.
pub async fn add_tag_to_note(
    conn: &mut SqliteConnection,
    note_id: i64,
    tag_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO note_tags (note_id, tag_id) VALUES (?, ?)")
        .bind(note_id)
        .bind(tag_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 노트의 태그 연결을 모두 해제합니다 (관계 교체의 앞단계).
pub async fn clear_note_tags(conn: &mut SqliteConnection, note_id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM note_tags WHERE note_id = ?")
        .bind(note_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 특정 노트에 연결된 모든 태그를 조회합니다.
pub async fn get_note_tags(pool: &SqlitePool, note_id: i64) -> Result<Vec<Tag>, AppError> {
    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.name
        FROM tags t
        JOIN note_tags nt ON nt.tag_id = t.id
        WHERE nt.note_id = ?
        ORDER BY t.id
        "#,
    )
    .bind(note_id)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}
