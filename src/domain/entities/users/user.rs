//! User Entity Implementation
//!
//! 채팅 서비스 계정의 핵심 엔티티입니다.
//! 토큰 클레임에 들어가는 id, name, email의 원천입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::token::TokenSubject;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자로 저장)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name,
            email: normalize_email(&email),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// 토큰 발급 입력으로 변환
    pub fn token_subject(&self) -> TokenSubject {
        TokenSubject::new(self.id_string(), self.name.clone(), self.email.clone())
    }
}

/// 이메일 비교용 정규화 (앞뒤 공백 제거 + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
