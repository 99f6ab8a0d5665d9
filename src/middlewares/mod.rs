//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer` 헤더 또는 `access_token` 쿠키에서 토큰 추출
//! - 액세스 토큰 계약으로 검증 (리프레시 토큰은 거부)
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(token_service.clone()) // web::Data<TokenService>
//!     .service(
//!         web::scope("/api/protected")
//!             .wrap(AuthMiddleware::required())
//!             .route("/me", web::get().to(me)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_inner::ACCESS_TOKEN_COOKIE;
pub use auth_middleware::AuthMiddleware;
