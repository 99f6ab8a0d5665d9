use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::errors::AppError;

/// 토큰을 SHA-256 해시로 변환
///
/// 저장소 키로 사용하기 위해 JWT 원문 대신 64글자 16진수 해시를 사용합니다.
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

/// 저장된 리프레시 토큰 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    /// 토큰 소유자 ID
    pub user_id: String,
    /// [`hash_token`] 결과
    pub token_hash: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// 폐기 시각 (로그아웃, 회전, 일괄 폐기)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenRecord {
    pub fn new(
        user_id: impl Into<String>,
        token_hash: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            token_hash: token_hash.into(),
            issued_at,
            expires_at,
            revoked_at: None,
        }
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// 폐기되지 않았고 만료되지 않음
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked() && !self.is_expired(now)
    }
}

/// 리프레시 토큰 저장소
///
/// 모든 조회와 변경은 토큰 원문이 아닌 [`hash_token`] 값으로 이루어집니다.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// 레코드 저장. 같은 해시가 있으면 덮어씁니다.
    async fn save(&self, record: RefreshTokenRecord) -> Result<(), AppError>;

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;

    /// 토큰 폐기
    ///
    /// # Returns
    /// * `Ok(true)` - 이번 호출로 폐기됨
    /// * `Ok(false)` - 없는 토큰이거나 이미 폐기됨
    async fn revoke(&self, token_hash: &str, at: DateTime<Utc>) -> Result<bool, AppError>;

    /// 사용자의 활성 토큰 전체 폐기. 폐기된 개수를 반환합니다.
    async fn revoke_all_for_user(&self, user_id: &str, at: DateTime<Utc>)
        -> Result<usize, AppError>;

    /// 만료된 레코드 삭제. 삭제된 개수를 반환합니다.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;
}

/// 프로세스 메모리에 리프레시 토큰 레코드를 보관하는 저장소
#[derive(Debug, Default)]
pub struct InMemoryRefreshTokenRepository {
    records: RwLock<HashMap<String, RefreshTokenRecord>>,
}

impl InMemoryRefreshTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn save(&self, record: RefreshTokenRecord) -> Result<(), AppError> {
        self.records
            .write()
            .await
            .insert(record.token_hash.clone(), record);
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError> {
        Ok(self.records.read().await.get(token_hash).cloned())
    }

    async fn revoke(&self, token_hash: &str, at: DateTime<Utc>) -> Result<bool, AppError> {
        let mut records = self.records.write().await;

        match records.get_mut(token_hash) {
            Some(record) if !record.is_revoked() => {
                record.revoked_at = Some(at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn revoke_all_for_user(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let mut records = self.records.write().await;
        let mut revoked = 0;

        for record in records
            .values_mut()
            .filter(|r| r.user_id == user_id && !r.is_revoked())
        {
            record.revoked_at = Some(at);
            revoked += 1;
        }

        Ok(revoked)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| !r.is_expired(now));

        Ok(before - records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(user_id: &str, token: &str, now: DateTime<Utc>) -> RefreshTokenRecord {
        RefreshTokenRecord::new(user_id, hash_token(token), now, now + Duration::days(7))
    }

    #[test]
    fn test_hash_token_is_sha256_hex() {
        let hash = hash_token("abc");

        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }

    #[actix_web::test]
    async fn test_save_and_find_by_hash() {
        let repo = InMemoryRefreshTokenRepository::new();
        let now = Utc::now();
        repo.save(record("u1", "token-a", now)).await.unwrap();

        let found = repo.find_by_hash(&hash_token("token-a")).await.unwrap().unwrap();
        assert_eq!(found.user_id, "u1");
        assert!(found.is_active(now));
        assert!(repo.find_by_hash(&hash_token("token-b")).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_revoke_is_idempotent() {
        let repo = InMemoryRefreshTokenRepository::new();
        let now = Utc::now();
        repo.save(record("u1", "token-a", now)).await.unwrap();
        let hash = hash_token("token-a");

        assert!(repo.revoke(&hash, now).await.unwrap());
        assert!(!repo.revoke(&hash, now).await.unwrap());
        assert!(!repo.revoke(&hash_token("unknown"), now).await.unwrap());

        let found = repo.find_by_hash(&hash).await.unwrap().unwrap();
        assert_eq!(found.revoked_at, Some(now));
    }

    #[actix_web::test]
    async fn test_revoke_all_for_user() {
        let repo = InMemoryRefreshTokenRepository::new();
        let now = Utc::now();
        repo.save(record("u1", "a", now)).await.unwrap();
        repo.save(record("u1", "b", now)).await.unwrap();
        repo.save(record("u2", "c", now)).await.unwrap();
        repo.revoke(&hash_token("b"), now).await.unwrap();

        assert_eq!(repo.revoke_all_for_user("u1", now).await.unwrap(), 1);
        let other = repo.find_by_hash(&hash_token("c")).await.unwrap().unwrap();
        assert!(other.is_active(now));
    }

    #[actix_web::test]
    async fn test_delete_expired() {
        let repo = InMemoryRefreshTokenRepository::new();
        let now = Utc::now();
        repo.save(record("u1", "fresh", now)).await.unwrap();
        repo.save(RefreshTokenRecord::new(
            "u1",
            hash_token("stale"),
            now - Duration::days(8),
            now - Duration::days(1),
        ))
        .await
        .unwrap();

        assert_eq!(repo.delete_expired(now).await.unwrap(), 1);
        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_hash(&hash_token("fresh")).await.unwrap().is_some());
    }
}
