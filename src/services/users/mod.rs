//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 비밀번호 검증, 조회를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let user = user_service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
