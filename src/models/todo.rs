//! # 할일 모델 정의
//!
//! 할일(Todo)은 노트에 붙는 체크리스트 항목입니다.
//! 태그와 마찬가지로 직접 생성 API가 없고, 노트 쓰기 요청의
//! 중첩 배열을 통해서만 만들어집니다. (제목, 요청자) 쌍이 중복 제거 키입니다.

use serde::{Deserialize, Serialize};

/// 할일 제목 길이 제한 (유니코드 문자 수 기준)
pub const TODO_TITLE_MAX: usize = 100;

/// 할일 엔티티 — DB의 `todos` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
}

/// 노트 쓰기 요청에 중첩되는 할일 — `{ "title": "..." }` 형태.
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub title: String,
}

/// 할일 수정 요청 — `PATCH /api/v1/todos/{id}`의 요청 본문에 해당합니다.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
}
