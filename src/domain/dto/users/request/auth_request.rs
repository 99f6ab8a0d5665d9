//! 인증 요청관련 DTO
//!
//! 회원가입과 로그인을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자여야 합니다"))]
    pub password: String,
}

/// 공백만으로 이루어진 값 거부
///
/// 이름은 저장 전에 trim 되므로 길이 검사만으로는 빈 이름을 막을 수 없습니다.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("이름은 공백일 수 없습니다".into()));
    }
    Ok(())
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "correct horse".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..ok
        };
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_register_request_rejects_blank_name() {
        let blank = RegisterRequest {
            name: "   ".to_string(),
            email: "a@x.com".to_string(),
            password: "correct horse".to_string(),
        };

        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_login_request_rejects_bad_email() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
