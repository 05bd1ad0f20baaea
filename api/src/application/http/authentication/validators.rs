use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignUpValidator {
    #[validate(length(min = 1, message = "please tell us your name"))]
    pub name: String,

    #[validate(email(message = "please provide a valid email"))]
    pub email: String,

    #[serde(default)]
    pub photo_url: Option<String>,

    #[validate(length(min = 8, message = "a password must have at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirm: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "please provide a password"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordValidator {
    #[validate(email(message = "please provide a valid email"))]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordValidator {
    #[validate(length(min = 8, message = "a password must have at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirm: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordValidator {
    #[validate(length(min = 1, message = "please provide your current password"))]
    pub password_current: String,

    #[validate(length(min = 8, message = "a password must have at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirm: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_requires_matching_passwords() {
        let payload = SignUpValidator {
            name: "Jonas Schmedtmann".to_string(),
            email: "jonas@example.com".to_string(),
            photo_url: None,
            password: "hunter2222".to_string(),
            password_confirm: "different".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn signup_enforces_password_length() {
        let payload = SignUpValidator {
            name: "Jonas Schmedtmann".to_string(),
            email: "jonas@example.com".to_string(),
            photo_url: None,
            password: "short".to_string(),
            password_confirm: "short".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn well_formed_signup_passes() {
        let payload = SignUpValidator {
            name: "Jonas Schmedtmann".to_string(),
            email: "jonas@example.com".to_string(),
            photo_url: None,
            password: "hunter2222".to_string(),
            password_confirm: "hunter2222".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
