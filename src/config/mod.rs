//! # Configuration Module
//!
//! 서비스 설정을 관리하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`jwt_config`] - 액세스/리프레시 토큰 비밀키, 만료 정책, 서명 알고리즘
//! - [`data_config`] - 실행 환경, bcrypt cost, 서버 바인딩, Rate Limiting
//!
//! ## 설계 원칙
//!
//! 토큰 설정은 시작 시 한 번 읽어 불변 구조체로 만들고 서비스 생성자에 명시적으로
//! 전달합니다. 서명 함수 안에서 환경 변수를 다시 읽지 않습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_REFRESH_SECRET="another-super-secret-key"
//! export JWT_EXPIRES_IN="1h"
//! export JWT_REFRESH_EXPIRES_IN="7d"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod jwt_config;

pub use data_config::*;
pub use jwt_config::*;
