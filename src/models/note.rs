//! # 노트 모델 정의
//!
//! 노트(Note) 도메인에서 사용하는 데이터 구조체들을 정의합니다.
//! 노트는 태그/할일/참조 링크를 중첩 배열로 품는 복합 리소스입니다.
//!
//! ## 구조체 역할
//! - `Note`: DB의 `notes` 테이블 한 행(row)에 대응 (소유자 포함, 응답에는 비노출)
//! - `NoteSummary`: 목록 응답용 — `description`/`notation`을 뺀 요약 형태
//! - `NoteDetail`: 단건 조회/생성/수정 응답용 — 모든 필드 + 중첩 컬렉션
//! - `CreateNoteRequest` / `UpdateNoteRequest`: 쓰기 요청 본문
//!
//! 요청 구조체에는 소유자 필드가 아예 없습니다. 본문에 `user`를 넣어 보내도
//! serde가 모르는 키를 버리므로, 소유자 변경 시도는 조용히 무시됩니다.

use serde::{Deserialize, Serialize};

use crate::models::link::{Link, LinkPayload};
use crate::models::tag::{Tag, TagPayload};
use crate::models::todo::{Todo, TodoPayload};

/// 필드 길이 제한 (유니코드 문자 수 기준)
pub const NOTE_TITLE_MAX: usize = 100;
pub const NOTE_DESCRIPTION_MAX: usize = 280;
pub const NOTE_REF_MAX: usize = 700;

/// 노트 엔티티 — DB의 `notes` 테이블 한 행에 대응합니다.
///
/// `user_id`는 소유권 검사에만 쓰이고 API 응답으로 직렬화되지 않습니다.
/// (응답은 `NoteSummary`/`NoteDetail`로 별도 구성)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub notation: String,
    /// 외부 자료를 가리키는 참조 문자열. 컬럼명은 `ref`지만
    /// Rust 예약어와 겹쳐 필드명은 `reference`를 씁니다.
    #[sqlx(rename = "ref")]
    pub reference: String,
    pub created_at: String,
    pub edited_at: String,
}

/// 노트 목록 응답 — 요약 형태입니다.
///
/// 목록에서는 본문성 필드(`description`, `notation`)를 생략하고,
/// 중첩 컬렉션(태그/할일/링크)은 포함합니다.
#[derive(Debug, Serialize)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub created_at: String,
    pub edited_at: String,
    pub tags: Vec<Tag>,
    pub todos: Vec<Todo>,
    pub links: Vec<Link>,
}

/// 노트 단건 응답 — 모든 스칼라 필드와 중첩 컬렉션을 포함합니다.
#[derive(Debug, Serialize)]
pub struct NoteDetail {
    pub id: i64,
    pub title: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub created_at: String,
    pub edited_at: String,
    pub description: String,
    pub notation: String,
    pub tags: Vec<Tag>,
    pub todos: Vec<Todo>,
    pub links: Vec<Link>,
}

impl NoteSummary {
    /// 행과 연관 컬렉션으로 요약 응답을 조립합니다.
    pub fn from_parts(note: Note, tags: Vec<Tag>, todos: Vec<Todo>, links: Vec<Link>) -> Self {
        Self {
            id: note.id,
            title: note.title,
            reference: note.reference,
            created_at: note.created_at,
            edited_at: note.edited_at,
            tags,
            todos,
            links,
        }
    }
}

impl NoteDetail {
    /// 행과 연관 컬렉션으로 상세 응답을 조립합니다.
    pub fn from_parts(note: Note, tags: Vec<Tag>, todos: Vec<Todo>, links: Vec<Link>) -> Self {
        Self {
            id: note.id,
            title: note.title,
            reference: note.reference,
            created_at: note.created_at,
            edited_at: note.edited_at,
            description: note.description,
            notation: note.notation,
            tags,
            todos,
            links,
        }
    }
}

/// 노트 생성 요청 — `POST /api/v1/notes`의 요청 본문에 해당합니다.
///
/// `title`과 `description`은 필수이고, 나머지는 비워둘 수 있습니다.
/// 모든 필드에 `#[serde(default)]`를 붙인 이유: 키가 빠진 요청도 일단
/// 파싱한 뒤 핸들러의 검증에서 400과 필드 메시지를 돌려주기 위해서입니다.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notation: String,
    #[serde(default, rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub tags: Vec<TagPayload>,
    #[serde(default)]
    pub todos: Vec<TodoPayload>,
    #[serde(default)]
    pub links: Vec<LinkPayload>,
}

/// 노트 수정 요청 — `PATCH`/`PUT /api/v1/notes/{id}`의 요청 본문에 해당합니다.
///
/// 모든 필드가 Option인 이유: 부분 업데이트(partial update)이기 때문입니다.
/// 중첩 배열은 세 가지 상태를 구분합니다:
/// - 키 없음(`None`) → 기존 연관 관계를 건드리지 않음
/// - `Some([])` (빈 배열 포함) → 해당 종류의 연관 관계를 통째로 교체
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notation: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub tags: Option<Vec<TagPayload>>,
    pub todos: Option<Vec<TodoPayload>>,
    pub links: Option<Vec<LinkPayload>>,
}
