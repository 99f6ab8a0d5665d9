//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 이메일은 시스템 전체에서 유니크하며, 저장 전에 정규화됩니다.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::users::user::{normalize_email, User};
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **ConflictError**: 이메일 중복
/// - **RepositoryError**: 저장소 오류
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자
    /// * `Err(AppError::ConflictError)` - 같은 이메일의 사용자가 이미 존재
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 이메일 주소로 사용자 조회 (대소문자 무시)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
}

/// 프로세스 메모리에 사용자를 보관하는 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        user.email = normalize_email(&user.email);

        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        log::debug!("사용자 저장: {}", user.id);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = normalize_email(email);

        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new("Alice".to_string(), email.to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user("alice@example.com")).await.unwrap();

        let by_id = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "alice@example.com");

        let by_email = repo.find_by_email("ALICE@example.com ").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id));
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("alice@example.com")).await.unwrap();

        let result = repo.create(user("Alice@Example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(repo.count().await, 1);
    }

    #[actix_web::test]
    async fn test_missing_user() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.find_by_id(&Uuid::new_v4()).await.unwrap().is_none());
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
