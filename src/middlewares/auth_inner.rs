//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::auth::authentication_request::AuthMode;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 헤더가 없을 때 토큰을 찾는 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let token_service = req
                .app_data::<web::Data<TokenService>>()
                .cloned()
                .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

            let auth_result = authenticate(&req, &token_service);

            match (mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                (AuthMode::Required, Ok(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                (AuthMode::Optional, Ok(user)) => {
                    log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(err)) => {
                    log::debug!("선택적 인증: {}, 요청 진행", err);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 액세스 토큰을 찾아 검증
///
/// `Authorization: Bearer` 헤더를 우선하고, 없으면 `access_token` 쿠키를 사용합니다.
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match header {
        Some(auth_header) => token_service.extract_bearer_token(auth_header)?.to_string(),
        None => req
            .cookie(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))?,
    };

    let claims = token_service.verify_access_token(&token).into_result()?;

    AuthenticatedUser::from_claims(&claims)
        .ok_or_else(|| AppError::AuthenticationError("토큰에 사용자 ID가 없습니다".to_string()))
}
