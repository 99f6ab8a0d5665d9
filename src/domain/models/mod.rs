//! 도메인 모델 모듈
//!
//! 영속화되지 않는 값 객체들을 정의합니다.
//!
//! - [`token`] - JWT 클레임, 토큰 쌍, 검증 결과
//! - [`auth`] - 요청에 부착되는 인증 사용자 정보와 인증 모드

pub mod auth;
pub mod token;
