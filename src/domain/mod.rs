//! # Domain Layer
//!
//! 토큰 서비스와 세션 흐름이 사용하는 도메인 타입을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! domain/
//! ├── entities/   영속화되는 엔티티 (User)
//! ├── models/     값 객체 (토큰 클레임, 검증 결과, 인증 사용자)
//! └── dto/        HTTP 요청/응답 구조체
//! ```
//!
//! ## 토큰 클레임 모델
//!
//! 액세스 토큰과 리프레시 토큰은 `IdentityClaims`를 공유하는
//! `TokenClaims::Access` / `TokenClaims::Refresh` 두 변형으로 표현됩니다.
//! 검증 결과를 받은 쪽은 변형을 매칭하는 것만으로 토큰 종류를 알 수 있습니다.
//!
//! ```rust,ignore
//! match verification.into_result()? {
//!     TokenClaims::Access(identity) => { /* API 접근 허용 */ }
//!     TokenClaims::Refresh(_) => unreachable!("verify_access_token never yields refresh claims"),
//! }
//! ```

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::*;
pub use models::*;
