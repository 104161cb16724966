//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 소유권 스코프 규칙: 사용자 데이터(노트/태그/할일/링크)를 읽고 쓰는 모든
//! 쿼리는 요청자의 `user_id`를 조건에 포함합니다. 다른 사용자의 행은 쿼리
//! 결과에 아예 나타나지 않으므로, 상위 계층에서는 "없음"으로만 보입니다.
//!
//! 각 하위 모듈:
//! - `links`: 참조 링크 쿼리 + 노트-링크 관계
//! - `notes`: 노트 CRUD, 태그 필터, 중첩 컬렉션을 묶는 트랜잭션 쓰기
//! - `tags`: 태그 쿼리 + 노트-태그 관계 (get-or-create 포함)
//! - `todos`: 할일 쿼리 + 노트-할일 관계
//! - `users`: 사용자 인증 관련 쿼리

pub mod links;
pub mod notes;
pub mod tags;
pub mod todos;
pub mod users;

// 하위 모듈의 공개 함수를 재공개(re-export)하여
// `crate::db::list_notes`처럼 바로 접근할 수 있게 합니다.
pub use links::*;
pub use notes::*;
pub use tags::*;
pub use todos::*;
