use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::TokenClaims;

/// 액세스 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 표시 이름
    pub name: String,

    /// 이메일
    pub email: String,
}

impl AuthenticatedUser {
    /// 검증된 클레임에서 사용자 정보를 만듭니다. `id`가 없으면 `None`.
    pub fn from_claims(claims: &TokenClaims) -> Option<Self> {
        let identity = claims.identity();
        Some(Self {
            user_id: identity.id.clone()?,
            name: identity.name.clone(),
            email: identity.email.clone(),
        })
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::IdentityClaims;

    #[test]
    fn test_from_claims_requires_subject_id() {
        let mut identity = IdentityClaims {
            id: Some("u1".to_string()),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            jti: None,
            iat: 0,
            exp: 60,
        };

        let user = AuthenticatedUser::from_claims(&TokenClaims::Access(identity.clone())).unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(user.email, "a@x.com");

        identity.id = None;
        assert!(AuthenticatedUser::from_claims(&TokenClaims::Access(identity)).is_none());
    }
}
