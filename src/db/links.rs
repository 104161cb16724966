//! # 참조 링크 데이터베이스 쿼리 모듈
//!
//! `links` 테이블과 `note_links` 관계 테이블을 다룹니다.
//! 태그와 마찬가지로 이름 내림차순 정렬과 `assigned_only` 필터를 지원합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteConnection, SqlitePool};

/// 요청자의 링크를 이름 내림차순으로 조회합니다.
///
/// `assigned_only`가 참이면 최소 한 개의 노트에 연결된 링크만 반환합니다.
pub async fn list_links(
    pool: &SqlitePool,
    user_id: &str,
    assigned_only: bool,
) -> Result<Vec<Link>, AppError> {
    let links = if assigned_only {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT DISTINCT l.id, l.name
            FROM links l
            JOIN note_links nl ON nl.link_id = l.id
            WHERE l.user_id = ?
            ORDER BY l.name DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Link>(
            "SELECT id, name FROM links WHERE user_id = ? ORDER BY name DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?
    };

    Ok(links)
}

/// id로 요청자의 링크 하나를 조회합니다.
pub async fn get_link(pool: &SqlitePool, user_id: &str, id: i64) -> Result<Option<Link>, AppError> {
    let link = sqlx::query_as::<_, Link>(
        "SELECT id, name FROM links WHERE id = ? AND user_id = ?",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(link)
}

/// 링크 이름을 수정합니다.
pub async fn update_link(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    req: &UpdateLinkRequest,
) -> Result<Option<Link>, AppError> {
    if get_link(pool, user_id, id).await?.is_none() {
        return Ok(None);
    }

    if let Some(name) = &req.name {
        let taken = sqlx::query_as::<_, (i64,)>(
            "SELECT id FROM links WHERE user_id = ? AND name = ? AND id != ?",
        )
        .bind(user_id)
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        if taken.is_some() {
            return Err(AppError::Conflict("Link name already in use".to_string()));
        }

        sqlx::query("UPDATE links SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(pool)
            .await?;
    }

    get_link(pool, user_id, id).await
}

/// 요청자의 링크를 삭제합니다. 노트와의 관계는 CASCADE로 정리됩니다.
pub async fn delete_link(pool: &SqlitePool, user_id: &str, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM links WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// (이름, 요청자) 쌍으로 링크를 찾고, 없으면 새로 만듭니다 (멱등).
pub async fn get_or_create_link(
    conn: &mut SqliteConnection,
    user_id: &str,
    name: &str,
) -> Result<i64, AppError> {
    let existing = sqlx::query_as::<_, (i64,)>(
        "SELECT id FROM links WHERE user_id = ? AND name = ?",
    )
    .bind(user_id)
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let result = sqlx::query("INSERT INTO links (user_id, name) VALUES (?, ?)")
        .bind(user_id)
        .bind(name)
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// 노트에 링크를 연결합니다.
pub async fn add_link_to_note(
    conn: &mut SqliteConnection,
    note_id: i64,
    link_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO note_links (note_id, link_id) VALUES (?, ?)")
        .bind(note_id)
        .bind(link_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 노트의 링크 연결을 모두 해제합니다.
pub async fn clear_note_links(conn: &mut SqliteConnection, note_id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM note_links WHERE note_id = ?")
        .bind(note_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 특정 노트에 연결된 모든 링크를 조회합니다.
pub async fn get_note_links(pool: &SqlitePool, note_id: i64) -> Result<Vec<Link>, AppError> {
    let links = sqlx::query_as::<_, Link>(
        r#"
        SELECT l.id, l.name
        FROM links l
        JOIN note_links nl ON nl.link_id = l.id
        WHERE nl.note_id = ?
        ORDER BY l.id
        "#,
    )
    .bind(note_id)
    .fetch_all(pool)
    .await?;

    Ok(links)
}
