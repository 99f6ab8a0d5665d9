//! 채팅 인증 서비스 백엔드
//!
//! 채팅 애플리케이션을 위한 JWT 액세스/리프레시 토큰 발급 및 검증 서비스입니다.
//!
//! # Features
//!
//! - **토큰 서비스**: 종류별 비밀키와 만료 정책을 가진 액세스/리프레시 토큰
//! - **교차 사용 차단**: `type` 클레임으로 리프레시 토큰의 API 접근 차단
//! - **세션 흐름**: 회원가입, 로그인, 토큰 회전, 재사용 감지, 로그아웃
//! - **인증 미들웨어**: Bearer 헤더 또는 쿠키 기반 액세스 토큰 검증
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← TokenService, AuthService, UserService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자, 리프레시 토큰 (in-memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chat_auth_service::config::JwtConfig;
//! use chat_auth_service::domain::token::{TokenClaims, TokenSubject};
//! use chat_auth_service::services::auth::TokenService;
//!
//! let service = TokenService::new(&JwtConfig::new("access-secret", "refresh-secret"));
//! let pair = service
//!     .issue_token_pair(&TokenSubject::new("u1", "Alice", "a@x.com"))
//!     .unwrap();
//!
//! match service.verify_access_token(&pair.access_token).into_result() {
//!     Ok(TokenClaims::Access(identity)) => assert_eq!(identity.email, "a@x.com"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
