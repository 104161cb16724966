//! # 할일 데이터베이스 쿼리 모듈
//!
//! `todos` 테이블과 `note_todos` 관계 테이블을 다룹니다.
//! 구조는 태그 쿼리 모듈과 같고, 목록 정렬만 최신순(id 내림차순)입니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::{SqliteConnection, SqlitePool};

/// 요청자의 할일 목록을 최신순으로 조회합니다.
pub async fn list_todos(pool: &SqlitePool, user_id: &str) -> Result<Vec<Todo>, AppError> {
    let todos = sqlx::query_as::<_, Todo>(
        "SELECT id, title FROM todos WHERE user_id = ? ORDER BY id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(todos)
}

/// id로 요청자의 할일 하나를 조회합니다.
pub async fn get_todo(pool: &SqlitePool, user_id: &str, id: i64) -> Result<Option<Todo>, AppError> {
    let todo = sqlx::query_as::<_, Todo>(
        "SELECT id, title FROM todos WHERE id = ? AND user_id = ?",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(todo)
}

/// 할일 제목을 수정합니다.
pub async fn update_todo(
    pool: &SqlitePool,
    user_id: &str,
    id: i64,
    req: &UpdateTodoRequest,
) -> Result<Option<Todo>, AppError> {
    if get_todo(pool, user_id, id).await?.is_none() {
        return Ok(None);
    }

    if let Some(title) = &req.title {
        // (user_id, title) 유니크 제약과의 충돌을 먼저 확인합니다
        let taken = sqlx::query_as::<_, (i64,)>(
            "SELECT id FROM todos WHERE user_id = ? AND title = ? AND id != ?",
        )
        .bind(user_id)
        .bind(title)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        if taken.is_some() {
            return Err(AppError::Conflict("Todo title already in use".to_string()));
        }

        sqlx::query("UPDATE todos SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(pool)
            .await?;
    }

    get_todo(pool, user_id, id).await
}

/// 요청자의 할일을 삭제합니다. 노트와의 관계는 CASCADE로 정리됩니다.
pub async fn delete_todo(pool: &SqlitePool, user_id: &str, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// (제목, 요청자) 쌍으로 할일을 찾고, 없으면 새로 만듭니다 (멱등).
pub async fn get_or_create_todo(
    conn: &mut SqliteConnection,
    user_id: &str,
    title: &str,
) -> Result<i64, AppError> {
    let existing = sqlx::query_as::<_, (i64,)>(
        "SELECT id FROM todos WHERE user_id = ? AND title = ?",
    )
    .bind(user_id)
    .bind(title)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some((id,)) = existing {
        return Ok(id);
    }

    let result = sqlx::query("INSERT INTO todos (user_id, title) VALUES (?, ?)")
        .bind(user_id)
        .bind(title)
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// 노트에 할일을 연결합니다.
pub async fn add_todo_to_note(
    conn: &mut SqliteConnection,
    note_id: i64,
    todo_id: i64,
) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO note_todos (note_id, todo_id) VALUES (?, ?)")
        .bind(note_id)
        .bind(todo_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 노트의 할일 연결을 모두 해제합니다.
pub async fn clear_note_todos(conn: &mut SqliteConnection, note_id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM note_todos WHERE note_id = ?")
        .bind(note_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 특정 노트에 연결된 모든 할일을 조회합니다.
pub async fn get_note_todos(pool: &SqlitePool, note_id: i64) -> Result<Vec<Todo>, AppError> {
    let todos = sqlx::query_as::<_, Todo>(
        r#"
        SELECT td.id, td.title
        FROM todos td
        JOIN note_todos nt ON nt.todo_id = td.id
        WHERE nt.note_id = ?
        ORDER BY td.id
        "#,
    )
    .bind(note_id)
    .fetch_all(pool)
    .await?;

    Ok(todos)
}
