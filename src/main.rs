//! 채팅 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 토큰/사용자 서비스를 초기화합니다.

use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use chat_auth_service::config::{JwtConfig, RateLimitConfig, ServerConfig};
use chat_auth_service::routes::configure_all_routes;
use chat_auth_service::state::AppServices;

/// 만료된 리프레시 토큰 정리 주기
const PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 채팅 인증 서비스 시작중...");

    let jwt_config = JwtConfig::from_env();
    if jwt_config.has_fallback_secrets() {
        warn!("⚠️ JWT 비밀키가 설정되지 않아 기본값을 사용합니다. 운영 환경에서는 반드시 JWT_SECRET, JWT_REFRESH_SECRET을 설정하세요");
    }
    info!(
        "JWT 설정: 알고리즘 {:?}, 액세스 {}초, 리프레시 {}초",
        jwt_config.algorithm(),
        jwt_config.access_expiry().num_seconds(),
        jwt_config.refresh_expiry().num_seconds()
    );

    let services = AppServices::in_memory(&jwt_config);
    spawn_refresh_token_purge(services.clone());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Auth API: http://{}/api/v1/auth", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();
        let services = services.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| services.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 만료된 리프레시 토큰 레코드를 주기적으로 정리합니다
fn spawn_refresh_token_purge(services: AppServices) {
    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(PURGE_INTERVAL);

        loop {
            ticker.tick().await;
            if let Err(e) = services.auth.purge_expired().await {
                error!("리프레시 토큰 정리 실패: {}", e);
            }
        }
    });
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=chat_auth_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
    info!(
        "Current profile: {}",
        std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    );
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 채팅 UI 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 쿠키 기반 토큰 전달 지원
        .supports_credentials()
        .max_age(3600)
}
