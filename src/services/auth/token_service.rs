//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급과 검증을 담당합니다.
//! 두 토큰은 같은 클레임 형태와 서명 알고리즘을 쓰지만 서로 다른 비밀키와
//! 만료 정책을 사용하며, `type` 판별자로 교차 사용을 막습니다.
//!
//! ## 검증 순서
//!
//! 1. 서명과 알고리즘 (요구한 종류의 비밀키)
//! 2. 클레임 구조 (`exp` 필수)
//! 3. 만료 (`exp <= now`이면 만료, 허용 오차 없음)
//! 4. `type` 판별자
//!
//! 서명 검사가 먼저이므로, 리프레시 비밀키로 서명된 토큰은 `type`을 `access`로
//! 위조해도 액세스 검증을 통과할 수 없습니다.
//!
//! 검증 실패는 패닉이나 `Err`로 전파되지 않고 항상 [`TokenVerification::Invalid`]로
//! 반환됩니다. 서비스는 불변 상태만 가지므로 여러 요청 워커에서 공유해도 안전합니다.

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use validator::Validate;

use crate::config::JwtConfig;
use crate::domain::models::token::{
    IdentityClaims, TokenClaims, TokenKind, TokenPair, TokenSubject, TokenVerification,
    UnverifiedClaims,
};
use crate::errors::{AppError, TokenError};
use crate::services::auth::clock::{Clock, SystemClock};

/// 한 종류의 토큰에 대한 키와 만료 정책
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry: chrono::Duration,
}

impl SigningKeys {
    fn new(secret: &str, expiry: chrono::Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry,
        }
    }
}

/// JWT 토큰 관리 서비스
///
/// HMAC 서명을 사용하여 토큰을 생성하고 검증합니다.
/// 기본 정책은 액세스 토큰 1시간, 리프레시 토큰 7일입니다.
pub struct TokenService {
    access: SigningKeys,
    refresh: SigningKeys,
    algorithm: Algorithm,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// 설정에서 서명 키를 미리 만들어 서비스를 생성합니다.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chat_auth_service::config::JwtConfig;
    /// use chat_auth_service::domain::token::TokenSubject;
    /// use chat_auth_service::services::auth::TokenService;
    ///
    /// let service = TokenService::new(&JwtConfig::new("access-secret", "refresh-secret"));
    /// let subject = TokenSubject::new("u1", "Alice", "a@x.com");
    ///
    /// let token = service.issue_access_token(&subject).unwrap();
    /// assert!(service.verify_access_token(&token).is_valid());
    /// assert!(!service.verify_refresh_token(&token).is_valid());
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        let algorithm = config.algorithm();

        let mut validation = Validation::new(algorithm);
        // 만료는 주입된 시계로 직접 판단
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            access: SigningKeys::new(config.secret(TokenKind::Access), config.access_expiry()),
            refresh: SigningKeys::new(config.secret(TokenKind::Refresh), config.refresh_expiry()),
            algorithm,
            validation,
            clock: Arc::new(SystemClock),
        }
    }

    /// 시각 공급자를 교체합니다.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// 발급/검증에 사용하는 현재 시각
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    pub fn access_expiry(&self) -> chrono::Duration {
        self.access.expiry
    }

    pub fn refresh_expiry(&self) -> chrono::Duration {
        self.refresh.expiry
    }

    /// 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSubject` - id, name, email 중 빈 값이 있음
    /// * `TokenError::Signing` - 서명 실패 또는 만료 시각이 표현 범위를 넘음
    ///   (정상 설정에서는 발생하지 않음)
    pub fn issue_access_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
        self.issue(TokenKind::Access, subject)
    }

    /// 리프레시 토큰 발급
    ///
    /// 액세스 토큰과 같은 계약이지만 리프레시 비밀키와 만료 정책을 사용합니다.
    pub fn issue_refresh_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
        self.issue(TokenKind::Refresh, subject)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    pub fn issue_token_pair(&self, subject: &TokenSubject) -> Result<TokenPair, TokenError> {
        let access_token = self.issue_access_token(subject)?;
        let refresh_token = self.issue_refresh_token(subject)?;

        Ok(TokenPair::bearer(
            access_token,
            refresh_token,
            self.access.expiry.num_seconds(),
        ))
    }

    /// 지정한 종류의 토큰을 발급합니다.
    pub fn issue(&self, kind: TokenKind, subject: &TokenSubject) -> Result<String, TokenError> {
        subject
            .validate()
            .map_err(|e| TokenError::InvalidSubject(e.to_string()))?;

        let keys = self.keys(kind);
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(keys.expiry)
            .ok_or_else(|| TokenError::Signing(format!("{} 토큰 만료 시각 범위 초과", kind)))?;
        let identity =
            IdentityClaims::from_subject(subject, now.timestamp(), expires_at.timestamp());
        let claims = TokenClaims::new(kind, identity);

        encode(&Header::new(self.algorithm), &claims, &keys.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// 액세스 토큰 검증
    ///
    /// 서명이 유효하더라도 `type`이 `access`가 아니면 실패합니다.
    pub fn verify_access_token(&self, token: &str) -> TokenVerification {
        self.verify(TokenKind::Access, token)
    }

    /// 리프레시 토큰 검증
    pub fn verify_refresh_token(&self, token: &str) -> TokenVerification {
        self.verify(TokenKind::Refresh, token)
    }

    /// 지정한 종류의 계약으로 토큰을 검증합니다.
    pub fn verify(&self, expected: TokenKind, token: &str) -> TokenVerification {
        let outcome = TokenVerification::from(self.decode(expected, token));
        if let Some(err) = outcome.error() {
            log::debug!("{} 토큰 검증 실패: {}", expected, err);
        }
        outcome
    }

    fn decode(&self, expected: TokenKind, token: &str) -> Result<TokenClaims, TokenError> {
        let keys = self.keys(expected);
        let data = decode::<UnverifiedClaims>(token, &keys.decoding, &self.validation)?;
        let UnverifiedClaims {
            token_type,
            identity,
        } = data.claims;

        if identity.exp <= self.clock.now().timestamp() {
            return Err(TokenError::Expired);
        }

        let found = token_type.ok_or(TokenError::MissingType)?;
        match TokenKind::from_claim(&found) {
            Some(kind) if kind == expected => Ok(TokenClaims::new(kind, identity)),
            _ => Err(TokenError::WrongType { expected, found }),
        }
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식 또는 빈 토큰
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let verification = token_service.verify_access_token(token);
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ").map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}
