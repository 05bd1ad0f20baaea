use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use wayfarer_core::domain::user::entities::UserRole;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "please provide a valid email"))]
    pub email: Option<String>,

    #[serde(default)]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Self-service profile update. Unknown fields are rejected so a client
/// cannot smuggle password changes through this route; those go through
/// the dedicated password endpoints.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateMeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(email(message = "please provide a valid email"))]
    pub email: Option<String>,

    #[serde(default)]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_me_rejects_password_fields() {
        let result: Result<UpdateMeValidator, _> =
            serde_json::from_str(r#"{"name":"Jonas","password":"hunter22"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_me_accepts_profile_fields() {
        let payload: UpdateMeValidator =
            serde_json::from_str(r#"{"name":"Jonas","email":"jonas@example.com"}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let payload = UpdateMeValidator {
            name: None,
            email: Some("not-an-email".to_string()),
            photo_url: None,
        };
        assert!(payload.validate().is_err());
    }
}
