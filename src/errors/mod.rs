//! 에러 타입 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 `AppError`
//! - [`token_error`] - 토큰 발급/검증 실패 분류 `TokenError`

pub mod errors;
pub mod token_error;

pub use errors::*;
pub use token_error::*;
