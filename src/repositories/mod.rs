//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 `async_trait` 기반 trait으로 정의되고, 서비스는 `Arc<dyn ...>`로
//! 주입받습니다. 기본 구현은 프로세스 메모리에 보관하는 in-memory 저장소입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod tokens;
pub mod users;
