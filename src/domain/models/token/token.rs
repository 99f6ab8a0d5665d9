//! JWT 클레임 구조체와 발급 결과
//!
//! 액세스 토큰과 리프레시 토큰은 같은 클레임 형태를 공유하지만,
//! `type` 판별자로 구분되는 서로 다른 변형으로 모델링합니다.
//!
//! ## 직렬화 형태
//!
//! ```json
//! {
//!   "type": "access",
//!   "id": "7f0c…",
//!   "name": "Alice",
//!   "email": "a@x.com",
//!   "jti": "3b1d…",
//!   "iat": 1700000000,
//!   "exp": 1700003600
//! }
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 토큰 종류 판별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// API 요청 인가용 단기 토큰
    Access,
    /// 액세스 토큰 재발급 전용 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// `type` 클레임 문자열을 판별자로 변환합니다. 대소문자를 구분합니다.
    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            "access" => Some(TokenKind::Access),
            "refresh" => Some(TokenKind::Refresh),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 토큰 발급 입력
///
/// 형식 검증은 상위 계층의 책임이며, 여기서는 값의 존재 여부만 확인합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TokenSubject {
    /// 사용자 식별자
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    /// 표시 이름
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// 이메일
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

impl TokenSubject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// 두 토큰 종류가 공유하는 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// 사용자 식별자 (클레임 수준에서는 선택, 발급 시에는 항상 존재)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// 토큰 고유 식별자. 같은 초에 발급된 토큰도 서로 구분됩니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

impl IdentityClaims {
    pub fn from_subject(subject: &TokenSubject, iat: i64, exp: i64) -> Self {
        Self {
            id: Some(subject.id.clone()),
            name: subject.name.clone(),
            email: subject.email.clone(),
            jti: Some(Uuid::new_v4().to_string()),
            iat,
            exp,
        }
    }
}

/// 서명되는 클레임 전체
///
/// `type` 필드는 같은 JSON 객체 안에 판별자로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TokenClaims {
    Access(IdentityClaims),
    Refresh(IdentityClaims),
}

impl TokenClaims {
    pub fn new(kind: TokenKind, identity: IdentityClaims) -> Self {
        match kind {
            TokenKind::Access => TokenClaims::Access(identity),
            TokenKind::Refresh => TokenClaims::Refresh(identity),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            TokenClaims::Access(_) => TokenKind::Access,
            TokenClaims::Refresh(_) => TokenKind::Refresh,
        }
    }

    pub fn identity(&self) -> &IdentityClaims {
        match self {
            TokenClaims::Access(identity) | TokenClaims::Refresh(identity) => identity,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.identity().id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.identity().name
    }

    pub fn email(&self) -> &str {
        &self.identity().email
    }

    pub fn issued_at(&self) -> i64 {
        self.identity().iat
    }

    pub fn expires_at(&self) -> i64 {
        self.identity().exp
    }
}

/// 검증 단계에서 판별자를 확인하기 전의 클레임
///
/// `type`을 문자열로 먼저 받아야 서명은 유효하지만 종류가 틀린 토큰을
/// 파싱 오류가 아닌 "wrong token type"으로 보고할 수 있습니다.
#[derive(Debug, Deserialize)]
pub(crate) struct UnverifiedClaims {
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    #[serde(flatten)]
    pub identity: IdentityClaims,
}

/// JWT 토큰 쌍 구조체
///
/// 클라이언트에게 전달되는 토큰 집합을 나타냅니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 항상 "Bearer"
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl TokenPair {
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity() -> IdentityClaims {
        IdentityClaims {
            id: Some("u1".to_string()),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            jti: None,
            iat: 100,
            exp: 200,
        }
    }

    #[test]
    fn test_claims_serialize_with_type_discriminant() {
        let claims = TokenClaims::Access(identity());
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "access",
                "id": "u1",
                "name": "Alice",
                "email": "a@x.com",
                "iat": 100,
                "exp": 200
            })
        );
    }

    #[test]
    fn test_from_subject_assigns_unique_jti() {
        let subject = TokenSubject::new("u1", "Alice", "a@x.com");
        let first = IdentityClaims::from_subject(&subject, 100, 200);
        let second = IdentityClaims::from_subject(&subject, 100, 200);

        assert!(first.jti.is_some());
        assert_ne!(first.jti, second.jti);
        assert_eq!(first.email, second.email);
    }

    #[test]
    fn test_unverified_claims_keep_unknown_type() {
        let raw: UnverifiedClaims = serde_json::from_value(json!({
            "type": "session",
            "name": "Alice",
            "email": "a@x.com",
            "iat": 1,
            "exp": 2
        }))
        .unwrap();

        assert_eq!(raw.token_type.as_deref(), Some("session"));
        assert_eq!(raw.identity.id, None);
    }

    #[test]
    fn test_token_kind_from_claim_is_exact() {
        assert_eq!(TokenKind::from_claim("access"), Some(TokenKind::Access));
        assert_eq!(TokenKind::from_claim("refresh"), Some(TokenKind::Refresh));
        assert_eq!(TokenKind::from_claim("Access"), None);
        assert_eq!(TokenKind::from_claim(""), None);
    }

    #[test]
    fn test_subject_requires_every_field() {
        assert!(TokenSubject::new("u1", "Alice", "a@x.com").validate().is_ok());

        let errors = TokenSubject::new("", "Alice", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("id"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("name"));
    }
}
