use serde::Deserialize;
use validator::Validate;

use crate::domain::models::token::TokenKind;

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 로그아웃 요청 DTO
///
/// 무효화할 리프레시 토큰을 전달합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 토큰 검증 요청 DTO
///
/// `type`이 없으면 액세스 토큰으로 검증합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyTokenRequest {
    #[validate(length(min = 1, message = "토큰이 필요합니다"))]
    pub token: String,

    #[serde(rename = "type", default)]
    pub kind: Option<TokenKind>,
}

impl VerifyTokenRequest {
    pub fn kind(&self) -> TokenKind {
        self.kind.unwrap_or(TokenKind::Access)
    }
}
