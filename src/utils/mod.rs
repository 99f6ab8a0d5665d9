//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`duration`] - `"1h"`, `"7d"` 형식의 기간 문자열 파서
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::duration::parse_duration;
//!
//! let ttl = parse_duration("15m")?;
//! ```

pub mod duration;
