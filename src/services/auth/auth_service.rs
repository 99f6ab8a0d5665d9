//! 로그인 세션 흐름
//!
//! 회원가입/로그인 시 토큰 쌍을 발급하고, 리프레시 토큰을 저장소에 기록하여
//! 회전(rotation)과 폐기를 관리합니다.
//!
//! ## 리프레시 흐름
//!
//! ```text
//! refresh_token
//!    │ verify_refresh_token (서명, 만료, type)
//!    ▼
//! hash_token → 저장소 조회
//!    │  없음 / 만료        → 401
//!    │  이미 폐기됨        → 사용자 토큰 전체 폐기 후 401 (재사용 감지)
//!    ▼
//! 기존 레코드 폐기 (원자적)
//!    │  이미 다른 요청이 폐기함 → 재사용 감지와 동일
//!    ▼
//! 새 토큰 쌍 발급 및 저장
//! ```
//!
//! 같은 리프레시 토큰으로 동시에 여러 요청이 들어와도 폐기에 성공한 한 요청만
//! 새 세션을 받습니다.

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{AuthResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::tokens::{hash_token, RefreshTokenRecord, RefreshTokenRepository};
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::UserService;

fn invalid_refresh_token() -> AppError {
    AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string())
}

/// 인증 세션 서비스
pub struct AuthService {
    token_service: Arc<TokenService>,
    user_service: Arc<UserService>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
}

impl AuthService {
    pub fn new(
        token_service: Arc<TokenService>,
        user_service: Arc<UserService>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
    ) -> Self {
        Self {
            token_service,
            user_service,
            refresh_tokens,
        }
    }

    /// 회원가입 후 바로 로그인 상태의 토큰 쌍을 발급합니다.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        let user = self.user_service.register(request).await?;
        self.start_session(&user).await
    }

    /// 이메일/비밀번호 로그인
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        let user = self
            .user_service
            .verify_password(&request.email, &request.password)
            .await?;

        log::info!("로그인 성공: {}", user.email);
        self.start_session(&user).await
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 사용된 리프레시 토큰은 폐기되며, 폐기된 토큰이 다시 제출되면
    /// 해당 사용자의 모든 리프레시 토큰을 폐기합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 검증 실패, 미등록/폐기/만료 토큰, 삭제된 사용자
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AppError> {
        let claims = self
            .token_service
            .verify_refresh_token(refresh_token)
            .into_result()?;

        let token_hash = hash_token(refresh_token);
        let record = self
            .refresh_tokens
            .find_by_hash(&token_hash)
            .await?
            .ok_or_else(invalid_refresh_token)?;

        let now = self.token_service.now();

        if record.is_revoked() {
            return Err(self.reuse_detected(&record.user_id).await?);
        }

        if record.is_expired(now) || claims.id() != Some(record.user_id.as_str()) {
            return Err(invalid_refresh_token());
        }

        let user = match self.user_service.get_user_by_id(&record.user_id).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) | Err(AppError::ValidationError(_)) => {
                return Err(invalid_refresh_token());
            }
            Err(e) => return Err(e),
        };

        if !self.refresh_tokens.revoke(&token_hash, now).await? {
            return Err(self.reuse_detected(&record.user_id).await?);
        }
        log::debug!("리프레시 토큰 회전: user={}", user.id);

        self.start_session(&user).await
    }

    /// 로그아웃
    ///
    /// 리프레시 토큰을 폐기합니다. 이미 폐기되었거나 모르는 토큰이어도 성공합니다.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let revoked = self
            .refresh_tokens
            .revoke(&hash_token(refresh_token), self.token_service.now())
            .await?;

        if revoked {
            log::info!("로그아웃: 리프레시 토큰 폐기");
        }
        Ok(())
    }

    /// 사용자의 모든 리프레시 토큰 폐기
    pub async fn revoke_all(&self, user_id: &str) -> Result<usize, AppError> {
        self.refresh_tokens
            .revoke_all_for_user(user_id, self.token_service.now())
            .await
    }

    /// 만료된 리프레시 토큰 레코드 정리
    pub async fn purge_expired(&self) -> Result<usize, AppError> {
        let purged = self
            .refresh_tokens
            .delete_expired(self.token_service.now())
            .await?;

        if purged > 0 {
            log::info!("만료된 리프레시 토큰 {}개 삭제", purged);
        }
        Ok(purged)
    }

    /// 폐기된 토큰 재사용 처리
    ///
    /// 사용자의 활성 리프레시 토큰을 모두 폐기하고, 호출자가 반환할 401 에러를 돌려줍니다.
    async fn reuse_detected(&self, user_id: &str) -> Result<AppError, AppError> {
        let revoked = self
            .refresh_tokens
            .revoke_all_for_user(user_id, self.token_service.now())
            .await?;
        log::warn!(
            "폐기된 리프레시 토큰 재사용 감지: user={}, 폐기된 토큰 {}개",
            user_id,
            revoked
        );
        Ok(invalid_refresh_token())
    }

    async fn start_session(&self, user: &User) -> Result<AuthResponse, AppError> {
        let tokens = self.token_service.issue_token_pair(&user.token_subject())?;

        let issued_at = self.token_service.now();
        let expires_at = issued_at
            .checked_add_signed(self.token_service.refresh_expiry())
            .ok_or_else(|| AppError::InternalError("리프레시 토큰 만료 시각 범위 초과".to_string()))?;
        let record = RefreshTokenRecord::new(
            user.id_string(),
            hash_token(&tokens.refresh_token),
            issued_at,
            expires_at,
        );
        self.refresh_tokens.save(record).await?;

        Ok(AuthResponse {
            user: UserResponse::from(user),
            tokens,
        })
    }
}
