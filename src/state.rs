//! 애플리케이션 서비스 조립
//!
//! 저장소와 서비스를 한 번 생성하여 `web::Data`로 모든 워커에 공유합니다.

use std::sync::Arc;

use actix_web::web;

use crate::config::{JwtConfig, PasswordConfig};
use crate::repositories::tokens::{InMemoryRefreshTokenRepository, RefreshTokenRepository};
use crate::repositories::users::{InMemoryUserRepository, UserRepository};
use crate::services::auth::{AuthService, TokenService};
use crate::services::users::UserService;

/// HTTP 핸들러가 사용하는 서비스 묶음
#[derive(Clone)]
pub struct AppServices {
    pub tokens: web::Data<TokenService>,
    pub users: web::Data<UserService>,
    pub auth: web::Data<AuthService>,
}

impl AppServices {
    /// in-memory 저장소와 현재 환경의 bcrypt cost로 서비스를 구성합니다.
    pub fn in_memory(jwt_config: &JwtConfig) -> Self {
        Self::assemble(TokenService::new(jwt_config), PasswordConfig::bcrypt_cost())
    }

    pub fn assemble(token_service: TokenService, bcrypt_cost: u32) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let refresh_repo: Arc<dyn RefreshTokenRepository> =
            Arc::new(InMemoryRefreshTokenRepository::new());

        let tokens = Arc::new(token_service);
        let users = Arc::new(UserService::new(user_repo).with_bcrypt_cost(bcrypt_cost));
        let auth = Arc::new(AuthService::new(tokens.clone(), users.clone(), refresh_repo));

        Self {
            tokens: web::Data::from(tokens),
            users: web::Data::from(users),
            auth: web::Data::from(auth),
        }
    }

    /// 서비스들을 앱 데이터로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.tokens.clone())
            .app_data(self.users.clone())
            .app_data(self.auth.clone());
    }
}
