//! # 참조 링크 모델 정의
//!
//! 링크(Link)는 노트가 가리키는 외부 참조(URL, 서지 정보 등)입니다.
//! 직접 생성 API가 없고 노트 쓰기 요청의 중첩 배열을 통해서만 만들어지며,
//! (이름, 요청자) 쌍이 중복 제거 키입니다.

use serde::{Deserialize, Serialize};

/// 링크 이름 길이 제한 (유니코드 문자 수 기준)
pub const LINK_NAME_MAX: usize = 700;

/// 링크 엔티티 — DB의 `links` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub name: String,
}

/// 노트 쓰기 요청에 중첩되는 링크 — `{ "name": "..." }` 형태.
#[derive(Debug, Deserialize)]
pub struct LinkPayload {
    pub name: String,
}

/// 링크 수정 요청 — `PATCH /api/v1/links/{id}`의 요청 본문에 해당합니다.
#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    pub name: Option<String>,
}
