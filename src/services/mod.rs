//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성(설정, 저장소, 다른 서비스)을 주입받고,
//! HTTP 계층에는 `web::Data`로 공유됩니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급과 검증
//! - 로그인 세션 (토큰 회전, 재사용 감지, 로그아웃)
//! - 사용자 등록과 비밀번호 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let token_service = Arc::new(TokenService::new(&jwt_config));
//! let user_service = Arc::new(UserService::new(user_repo));
//! ```

pub mod auth;
pub mod users;
