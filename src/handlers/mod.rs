//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 DTO를 받아 서비스에 위임하고, 결과를 JSON 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Chat App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 발급/검증, 세션                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 사용자, 리프레시 토큰            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`는 `ResponseError` 구현을 통해 상태 코드와 JSON 본문으로 변환됩니다.
//!
//! ```rust,ignore
//! #[post("/login")]
//! pub async fn login(
//!     auth_service: web::Data<AuthService>,
//!     payload: web::Json<LoginRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let response = auth_service.login(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod auth;
