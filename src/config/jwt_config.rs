//! # JWT Configuration Module
//!
//! 액세스/리프레시 토큰의 서명 비밀키와 만료 정책을 관리합니다.
//! 프로세스 시작 시 한 번 읽어 불변 구조체로 만든 뒤 `TokenService` 생성자에 전달합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="access-token-secret"
//! export JWT_REFRESH_SECRET="refresh-token-secret"
//! export JWT_EXPIRES_IN="1h"          # 기본값 1h
//! export JWT_REFRESH_EXPIRES_IN="7d"  # 기본값 7d
//! export JWT_ALGORITHM="HS256"        # HS256 | HS384 | HS512
//! ```
//!
//! ## 기본 비밀키
//!
//! 비밀키가 설정되지 않으면 고정된 기본 문자열로 대체하고 경고 로그만 남깁니다.
//! 이 기본값은 공개된 문자열이므로 실제 배포에서는 반드시 덮어써야 합니다.
//! [`JwtConfig::has_fallback_secrets`]로 대체 여부를 확인할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//! use crate::services::auth::TokenService;
//!
//! let config = JwtConfig::from_env();
//! if config.has_fallback_secrets() {
//!     log::warn!("기본 JWT 비밀키 사용 중");
//! }
//! let token_service = TokenService::new(&config);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::domain::models::token::TokenKind;
use crate::utils::duration::parse_duration;

pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const JWT_REFRESH_SECRET_ENV: &str = "JWT_REFRESH_SECRET";
pub const JWT_EXPIRES_IN_ENV: &str = "JWT_EXPIRES_IN";
pub const JWT_REFRESH_EXPIRES_IN_ENV: &str = "JWT_REFRESH_EXPIRES_IN";
pub const JWT_ALGORITHM_ENV: &str = "JWT_ALGORITHM";

pub const DEFAULT_ACCESS_SECRET: &str = "your-secret-key";
pub const DEFAULT_REFRESH_SECRET: &str = "your-refresh-secret-key";
pub const DEFAULT_ACCESS_EXPIRES_IN: &str = "1h";
pub const DEFAULT_REFRESH_EXPIRES_IN: &str = "7d";

/// 토큰 서명/만료 설정
///
/// 생성 이후에는 변경되지 않습니다. 비밀키는 `Debug` 출력에서 가려집니다.
#[derive(Clone)]
pub struct JwtConfig {
    access_secret: String,
    refresh_secret: String,
    access_expiry: Duration,
    refresh_expiry: Duration,
    algorithm: Algorithm,
    access_secret_is_fallback: bool,
    refresh_secret_is_fallback: bool,
}

impl JwtConfig {
    /// 명시적인 비밀키로 설정을 만듭니다. 만료 정책과 알고리즘은 기본값입니다.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_expiry: Duration::hours(1),
            refresh_expiry: Duration::days(7),
            algorithm: Algorithm::HS256,
            access_secret_is_fallback: false,
            refresh_secret_is_fallback: false,
        }
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수에서 설정을 읽습니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    /// 어떤 값이 없거나 잘못되어도 실패하지 않고 기본값으로 대체합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (access_secret, access_secret_is_fallback) = match read(JWT_SECRET_ENV) {
            Some(secret) => (secret, false),
            None => {
                log::warn!("{} not set, using default (not secure for production!)", JWT_SECRET_ENV);
                (DEFAULT_ACCESS_SECRET.to_string(), true)
            }
        };

        let (refresh_secret, refresh_secret_is_fallback) = match read(JWT_REFRESH_SECRET_ENV) {
            Some(secret) => (secret, false),
            None => {
                log::warn!(
                    "{} not set, using default (not secure for production!)",
                    JWT_REFRESH_SECRET_ENV
                );
                (DEFAULT_REFRESH_SECRET.to_string(), true)
            }
        };

        let access_expiry = read_expiry(
            JWT_EXPIRES_IN_ENV,
            read(JWT_EXPIRES_IN_ENV),
            DEFAULT_ACCESS_EXPIRES_IN,
        );
        let refresh_expiry = read_expiry(
            JWT_REFRESH_EXPIRES_IN_ENV,
            read(JWT_REFRESH_EXPIRES_IN_ENV),
            DEFAULT_REFRESH_EXPIRES_IN,
        );

        let algorithm = match read(JWT_ALGORITHM_ENV) {
            None => Algorithm::HS256,
            Some(raw) => match Algorithm::from_str(raw.trim()) {
                Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => alg,
                _ => {
                    log::warn!(
                        "{}={} is not an HMAC algorithm, using HS256",
                        JWT_ALGORITHM_ENV,
                        raw
                    );
                    Algorithm::HS256
                }
            },
        };

        Self {
            access_secret,
            refresh_secret,
            access_expiry,
            refresh_expiry,
            algorithm,
            access_secret_is_fallback,
            refresh_secret_is_fallback,
        }
    }

    pub fn with_access_expiry(mut self, expiry: Duration) -> Self {
        self.access_expiry = expiry;
        self
    }

    pub fn with_refresh_expiry(mut self, expiry: Duration) -> Self {
        self.refresh_expiry = expiry;
        self
    }

    /// HMAC 계열(HS256/HS384/HS512) 알고리즘만 의미가 있습니다.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn secret(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }

    pub fn expiry(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_expiry,
            TokenKind::Refresh => self.refresh_expiry,
        }
    }

    pub fn access_expiry(&self) -> Duration {
        self.access_expiry
    }

    pub fn refresh_expiry(&self) -> Duration {
        self.refresh_expiry
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// 해당 종류의 비밀키가 기본 문자열로 대체되었는지 여부
    pub fn uses_fallback_secret(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Access => self.access_secret_is_fallback,
            TokenKind::Refresh => self.refresh_secret_is_fallback,
        }
    }

    pub fn has_fallback_secrets(&self) -> bool {
        self.access_secret_is_fallback || self.refresh_secret_is_fallback
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_expiry", &self.access_expiry)
            .field("refresh_expiry", &self.refresh_expiry)
            .field("algorithm", &self.algorithm)
            .field("access_secret_is_fallback", &self.access_secret_is_fallback)
            .field("refresh_secret_is_fallback", &self.refresh_secret_is_fallback)
            .finish()
    }
}

fn read_expiry(key: &str, raw: Option<String>, default: &str) -> Duration {
    let fallback = || parse_duration(default).unwrap_or_else(|_| Duration::zero());

    match raw {
        None => fallback(),
        Some(raw) => parse_duration(&raw).unwrap_or_else(|e| {
            log::warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            fallback()
        }),
    }
}
