//! 인증 관련 HTTP 핸들러
//!
//! 회원가입, 로그인, 토큰 갱신/검증, 로그아웃, 현재 사용자 조회 엔드포인트입니다.
//! 서비스는 `web::Data`로 주입받습니다.

use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::tokens::request::{LogoutRequest, RefreshTokenRequest, VerifyTokenRequest};
use crate::domain::dto::tokens::response::ApiResponse;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::{AuthService, TokenService};
use crate::services::users::UserService;

/// 리프레시 토큰을 찾는 쿠키 이름
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// 회원가입 엔드포인트
///
/// 계정을 만들고 바로 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/register`
#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = auth_service.register(payload.into_inner()).await?;

    log::info!("회원가입 완료: {}", response.user.email);
    Ok(HttpResponse::Created().json(response))
}

/// 로컬 로그인 엔드포인트
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 엔드포인트
///
/// 리프레시 토큰은 요청 본문 또는 `refresh_token` 쿠키에서 찾습니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let body_token = body.as_ref().map(|b| b.refresh_token.as_str());
    let refresh_token = extract_refresh_token(&req, body_token)?;

    let response = auth_service.refresh(&refresh_token).await?;

    log::info!("토큰 갱신 성공: 사용자 ID {}", response.user.id);
    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃 엔드포인트
///
/// 리프레시 토큰을 폐기합니다. 이미 폐기된 토큰이어도 성공으로 응답합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/logout`
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
    body: Option<web::Json<LogoutRequest>>,
) -> Result<HttpResponse, AppError> {
    let body_token = body.as_ref().map(|b| b.refresh_token.as_str());
    let refresh_token = extract_refresh_token(&req, body_token)?;

    auth_service.logout(&refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("로그아웃되었습니다")))
}

/// 토큰 검증 엔드포인트
///
/// 검증 결과를 그대로 돌려줍니다. 실패도 `200 OK`와 `{"valid": false, "error": ...}`로
/// 응답합니다. `type`을 생략하면 액세스 토큰 계약으로 검증합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/verify`
#[post("/verify")]
pub async fn verify(
    token_service: web::Data<TokenService>,
    payload: web::Json<VerifyTokenRequest>,
) -> HttpResponse {
    let outcome = token_service.verify(payload.kind(), &payload.token);

    HttpResponse::Ok().json(outcome)
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// 액세스 토큰이 필요하며, 저장소에서 최신 사용자 정보를 조회합니다.
///
/// # Endpoint
/// `GET /api/v1/auth/me`
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = match user_service.get_user_by_id(&user.user_id).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) | Err(AppError::ValidationError(_)) => {
            return Err(AppError::AuthenticationError(
                "사용자를 찾을 수 없습니다".to_string(),
            ));
        }
        Err(e) => return Err(e),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(&user))))
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 요청 본문을 우선하고, 없으면 쿠키를 확인합니다.
fn extract_refresh_token(req: &HttpRequest, body: Option<&str>) -> Result<String, AppError> {
    if let Some(token) = body.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    req.cookie(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::AuthenticationError("리프레시 토큰이 제공되지 않았습니다".to_string())
        })
}
