//! 인증 및 보안 서비스 모듈
//!
//! JWT 액세스/리프레시 토큰의 발급과 검증, 로그인 세션 흐름을 담당합니다.
//!
//! # Features
//!
//! - 액세스/리프레시 토큰 발급 및 검증 ([`TokenService`])
//! - 로그인, 토큰 갱신(회전), 로그아웃 ([`AuthService`])
//! - 교체 가능한 시각 공급자 ([`Clock`])
//!
//! # Security
//!
//! - HMAC (HS256/HS384/HS512) 토큰 서명, 토큰 종류별 비밀키 분리
//! - `type` 클레임으로 액세스/리프레시 토큰 교차 사용 차단
//! - 리프레시 토큰은 SHA-256 해시로만 저장
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(&JwtConfig::from_env());
//! let pair = token_service.issue_token_pair(&user.token_subject())?;
//! let outcome = token_service.verify_access_token(&pair.access_token);
//! ```

pub mod auth_service;
pub mod clock;
pub mod token_service;

pub use auth_service::*;
pub use clock::*;
pub use token_service::*;
