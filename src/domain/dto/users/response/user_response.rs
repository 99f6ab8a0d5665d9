use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;

/// 클라이언트에 노출되는 사용자 정보 (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// 회원가입/로그인/토큰 갱신 응답
///
/// 토큰 필드는 최상위에 펼쳐서 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}
