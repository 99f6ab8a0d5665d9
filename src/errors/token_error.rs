//! 토큰 발급/검증 실패 분류
//!
//! 검증 실패는 호출자에게 `TokenVerification::Invalid`로 전달되며,
//! 메시지는 관측용으로만 원인을 구분합니다. 호출자는 모든 실패를 동일하게
//! 인증 실패로 처리해야 합니다.

use thiserror::Error;

use crate::domain::models::token::TokenKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// `exp` 시각이 지났음
    #[error("token expired")]
    Expired,

    /// 서명이 검증 키와 일치하지 않음 (위조, 다른 종류의 비밀키로 서명)
    #[error("invalid token signature")]
    InvalidSignature,

    /// 구조가 잘못되었거나 클레임을 해석할 수 없음
    #[error("malformed token: {0}")]
    Malformed(String),

    /// 서명은 유효하지만 `type` 클레임이 요구한 종류와 다름
    #[error("wrong token type: expected {expected}, found {found}")]
    WrongType { expected: TokenKind, found: String },

    /// `type` 클레임이 없음
    #[error("missing token type")]
    MissingType,

    /// 발급 입력(id, name, email) 누락
    #[error("invalid token subject: {0}")]
    InvalidSubject(String),

    #[error("token signing failed: {0}")]
    Signing(String),
}

impl TokenError {
    pub fn is_expired(&self) -> bool {
        matches!(self, TokenError::Expired)
    }

    /// 서명은 통과했지만 종류 판별에서 거부된 경우
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, TokenError::WrongType { .. } | TokenError::MissingType)
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::InvalidSignature
            }
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}
