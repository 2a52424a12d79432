//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DISPLAY_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[validate(length(min = 1, max = MAX_DISPLAY_NAME_LENGTH))]
    pub display_name: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_short_password() {
        let req = RegisterRequest {
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
            display_name: "Alice".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "long-enough-password".to_string(),
            display_name: "Alice".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_valid_input() {
        let req = RegisterRequest {
            email: "alice@example.com".to_string(),
            password: "long-enough-password".to_string(),
            display_name: "Alice".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
