//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 모든 리소스 핸들러는 `AuthUser` 추출자를 매개변수로 받습니다.
//! 토큰이 없거나 유효하지 않으면 핸들러 본문에 들어가기 전에
//! 401 응답이 반환됩니다.
//!
//! 각 하위 모듈:
//! - `auth`: 인증 관련 (회원가입, 로그인, 토큰 갱신, 로그아웃, 내 정보)
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `links`: 참조 링크 목록/수정/삭제 핸들러
//! - `notes`: 노트 CRUD 핸들러 (공유 상태 `AppState` 포함)
//! - `tags`: 태그 목록/수정/삭제 핸들러
//! - `todos`: 할일 목록/수정/삭제 핸들러

pub mod auth;
pub mod health;
pub mod links;
pub mod notes;
pub mod tags;
pub mod todos;

// 각 모듈의 핸들러 함수들을 재공개하여
// `routes::list_notes`처럼 바로 접근 가능하게 합니다.
pub use health::*;
pub use links::*;
pub use notes::*;
pub use tags::*;
pub use todos::*;
