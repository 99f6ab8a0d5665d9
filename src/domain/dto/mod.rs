//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator`로 입력값을 검증하고, 응답 DTO는 민감 정보를 제외합니다.
//!
//! - [`users`] - 회원가입, 로그인, 사용자 응답
//! - [`tokens`] - 토큰 갱신/로그아웃/검증 요청과 공통 응답 래퍼

pub mod tokens;
pub mod users;

