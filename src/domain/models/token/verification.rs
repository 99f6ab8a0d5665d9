//! 토큰 검증 결과
//!
//! 검증은 절대 실패를 경계 밖으로 전파하지 않고 태그된 결과로 반환합니다.
//! JSON으로는 `{"valid": true, "decoded": {…}}` 또는
//! `{"valid": false, "error": "…"}` 형태로 직렬화됩니다.
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::domain::models::token::TokenClaims;
use crate::errors::TokenError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerification {
    Valid(TokenClaims),
    Invalid(TokenError),
}

impl TokenVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenVerification::Valid(_))
    }

    pub fn decoded(&self) -> Option<&TokenClaims> {
        match self {
            TokenVerification::Valid(claims) => Some(claims),
            TokenVerification::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<&TokenError> {
        match self {
            TokenVerification::Valid(_) => None,
            TokenVerification::Invalid(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<TokenClaims, TokenError> {
        match self {
            TokenVerification::Valid(claims) => Ok(claims),
            TokenVerification::Invalid(err) => Err(err),
        }
    }
}

impl From<Result<TokenClaims, TokenError>> for TokenVerification {
    fn from(result: Result<TokenClaims, TokenError>) -> Self {
        match result {
            Ok(claims) => TokenVerification::Valid(claims),
            Err(err) => TokenVerification::Invalid(err),
        }
    }
}

impl Serialize for TokenVerification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TokenVerification", 2)?;
        match self {
            TokenVerification::Valid(claims) => {
                state.serialize_field("valid", &true)?;
                state.serialize_field("decoded", claims)?;
            }
            TokenVerification::Invalid(err) => {
                state.serialize_field("valid", &false)?;
                state.serialize_field("error", &err.to_string())?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::IdentityClaims;
    use serde_json::json;

    #[test]
    fn test_valid_outcome_serializes_decoded_claims() {
        let outcome = TokenVerification::Valid(TokenClaims::Refresh(IdentityClaims {
            id: Some("u1".to_string()),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            jti: None,
            iat: 10,
            exp: 20,
        }));

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["valid"], json!(true));
        assert_eq!(value["decoded"]["type"], json!("refresh"));
        assert_eq!(value["decoded"]["email"], json!("a@x.com"));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_invalid_outcome_serializes_error_message() {
        let outcome = TokenVerification::Invalid(TokenError::Expired);

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, json!({ "valid": false, "error": "token expired" }));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.error(), Some(&TokenError::Expired));
    }
}
