//! 토큰 도메인 모델
//!
//! - [`token`] - 토큰 종류, 발급 입력, 클레임, 토큰 쌍
//! - [`verification`] - 태그된 검증 결과

pub mod token;
pub mod verification;

pub use token::*;
pub use verification::*;
