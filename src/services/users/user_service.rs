//! # 사용자 관리 서비스 구현
//!
//! 계정 등록, 비밀번호 검증, 조회를 담당합니다.
//! 토큰 발급은 [`AuthService`](crate::services::auth::AuthService)가 담당하며,
//! 이 서비스는 토큰 주체가 될 [`User`]를 만들고 확인하는 역할만 합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost (`PasswordConfig`)
//! - **에러 메시지 통합**: 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 응답
//! - **입력 검증**: `validator`로 요청 DTO를 먼저 검증

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use bcrypt::{hash, verify};
use uuid::Uuid;
use validator::Validate;

use crate::config::PasswordConfig;
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::users::UserRepository;

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

/// 사용자 관리 서비스
///
/// ```rust,ignore
/// let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
///
/// let user = user_service.register(request).await?;
/// let same = user_service.verify_password(&user.email, "password123").await?;
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    /// 현재 환경의 bcrypt cost로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repo,
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// 새 로컬 계정 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자
    /// * `Err(AppError::ValidationError)` - 입력값 검증 실패
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        request.validate()?;

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let hash_start = Instant::now();
        let cost = self.bcrypt_cost;
        let password = request.password;
        let password_hash = web::block(move || hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.name.trim().to_string(), request.email, password_hash);
        let user = self.user_repo.create(user).await?;

        log::info!("사용자 등록 완료: {} ({})", user.id, user.email);
        Ok(user)
    }

    /// 로컬 계정 비밀번호 검증
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 엔티티
    /// * `Err(AppError::AuthenticationError)` - 존재하지 않는 이메일 또는 틀린 비밀번호
    /// * `Err(AppError::InternalError)` - 저장된 해시가 손상됨
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let verify_start = Instant::now();
        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let matches = web::block(move || verify(password, &stored_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !matches {
            log::warn!("로그인 실패: {}", user.email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::ValidationError)` - UUID 형식이 아님
    /// * `Err(AppError::NotFound)` - 사용자가 없음
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, AppError> {
        let uuid = Uuid::parse_str(id)
            .map_err(|_| AppError::ValidationError("잘못된 사용자 ID 형식입니다".to_string()))?;

        self.user_repo
            .find_by_id(&uuid)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new())).with_bcrypt_cost(4)
    }

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_password() {
        let service = service();
        let user = service.register(request("alice@example.com")).await.unwrap();

        assert_ne!(user.password_hash, "password123");
        assert!(user.password_hash.starts_with("$2"));
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_email() {
        let service = service();
        service.register(request("alice@example.com")).await.unwrap();

        let result = service.register(request("ALICE@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_register_validates_input() {
        let service = service();
        let mut invalid = request("not-an-email");
        invalid.password = "short".to_string();

        let result = service.register(invalid).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_register_rejects_blank_name_without_storing() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone()).with_bcrypt_cost(4);
        let mut blank = request("alice@example.com");
        blank.name = "   ".to_string();

        let result = service.register(blank).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(repo.count().await, 0);

        // 같은 이메일로 정상 등록 가능
        assert!(service.register(request("alice@example.com")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_verify_password_uses_same_message_for_all_failures() {
        let service = service();
        service.register(request("alice@example.com")).await.unwrap();

        let ok = service.verify_password("alice@example.com", "password123").await;
        assert!(ok.is_ok());

        let wrong_password = service
            .verify_password("alice@example.com", "nope")
            .await
            .unwrap_err();
        let unknown_email = service
            .verify_password("bob@example.com", "password123")
            .await
            .unwrap_err();
        assert!(matches!(wrong_password, AppError::AuthenticationError(_)));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[actix_web::test]
    async fn test_get_user_by_id() {
        let service = service();
        let user = service.register(request("alice@example.com")).await.unwrap();

        let found = service.get_user_by_id(&user.id_string()).await.unwrap();
        assert_eq!(found.id, user.id);

        let missing = service.get_user_by_id(&Uuid::new_v4().to_string()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
        let invalid = service.get_user_by_id("not-a-uuid").await;
        assert!(matches!(invalid, Err(AppError::ValidationError(_))));
    }
}
