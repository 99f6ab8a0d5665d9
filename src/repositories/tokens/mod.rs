//! 리프레시 토큰 저장소 모듈
//!
//! 발급된 리프레시 토큰의 SHA-256 해시와 만료/폐기 상태를 보관합니다.
//! 원문 토큰은 저장하지 않습니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{hash_token, RefreshTokenRecord};
//!
//! let record = RefreshTokenRecord::new(user_id, hash_token(&refresh_token), issued_at, expires_at);
//! token_repo.save(record).await?;
//!
//! // 로그아웃
//! token_repo.revoke(&hash_token(&refresh_token), Utc::now()).await?;
//! ```

pub mod token_repository;

pub use token_repository::*;
