//! # 태그 모델 정의
//!
//! 태그(Tag)는 노트를 분류하고 목록을 필터링하기 위한 라벨입니다.
//! 태그는 직접 생성 API가 없고, 노트 쓰기 요청의 중첩 배열을 통해서만
//! 만들어집니다(get-or-create).
//!
//! ## 구조체 역할
//! - `Tag`: 데이터베이스에 저장된 태그를 표현 (응답용)
//! - `TagPayload`: 노트 본문에 중첩되어 들어오는 태그 — 이름만 담습니다
//! - `UpdateTagRequest`: 태그 수정 시 클라이언트가 보내는 JSON 본문

use serde::{Deserialize, Serialize};

/// 태그 이름 길이 제한 (유니코드 문자 수 기준)
pub const TAG_NAME_MAX: usize = 50;

/// 태그 엔티티 — DB의 `tags` 테이블 한 행(row)에 대응합니다.
///
/// 소유자(user_id)는 쿼리 조건으로만 쓰이고 응답에는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    /// 태그 고유 식별자 (정수 자동 증가 키)
    pub id: i64,
    /// 태그 이름 (예: "Data Science", "Philosophy")
    pub name: String,
}

/// 노트 쓰기 요청에 중첩되는 태그 — `{ "name": "..." }` 형태.
///
/// (이름, 요청자) 쌍으로 기존 행을 찾고, 없으면 새로 만듭니다.
#[derive(Debug, Deserialize)]
pub struct TagPayload {
    pub name: String,
}

/// 태그 수정 요청 — `PATCH /api/v1/tags/{id}`의 요청 본문에 해당합니다.
///
/// 필드가 Option인 이유: PATCH는 부분 업데이트이므로
/// 빠진 필드는 None으로 처리되어 그대로 유지됩니다.
#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
}
