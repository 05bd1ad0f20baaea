use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::user::value_objects::CreateUserRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    User,
    Guide,
    LeadGuide,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Guide => "guide",
            UserRole::LeadGuide => "lead-guide",
            UserRole::Admin => "admin",
        }
    }

    pub fn from_str_or_default(raw: &str) -> Self {
        match raw {
            "admin" => UserRole::Admin,
            "lead-guide" => UserRole::LeadGuide,
            "guide" => UserRole::Guide,
            _ => UserRole::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub password_changed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub password_reset_token: Option<String>,
    #[serde(skip_serializing)]
    pub password_reset_expires: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: request.name,
            email: request.email,
            photo_url: request.photo_url,
            role: UserRole::User,
            password_hash: request.password_hash,
            password_changed_at: None,
            password_reset_token: None,
            password_reset_expires: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the password changed after the given JWT issued-at
    /// timestamp, which invalidates the token.
    pub fn changed_password_after(&self, token_issued_at: i64) -> bool {
        self.password_changed_at
            .map(|changed| changed.timestamp() > token_issued_at)
            .unwrap_or(false)
    }
}

#[cfg(test)]
impl User {
    pub fn fixture() -> Self {
        User::new(CreateUserRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            photo_url: None,
            password_hash: "$argon2id$fixture".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_users_start_active_with_the_user_role() {
        let user = User::fixture();
        assert!(user.active);
        assert_eq!(user.role, UserRole::User);
        assert!(user.password_changed_at.is_none());
    }

    #[test]
    fn password_change_invalidates_older_tokens_only() {
        let mut user = User::fixture();
        let now = Utc::now();
        user.password_changed_at = Some(now);

        let before = (now - Duration::minutes(5)).timestamp();
        let after = (now + Duration::minutes(5)).timestamp();
        assert!(user.changed_password_after(before));
        assert!(!user.changed_password_after(after));
    }

    #[test]
    fn unchanged_password_never_invalidates() {
        let user = User::fixture();
        assert!(!user.changed_password_after(0));
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in [UserRole::User, UserRole::Guide, UserRole::LeadGuide, UserRole::Admin] {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
        }
        assert_eq!(UserRole::from_str_or_default("nonsense"), UserRole::User);
    }
}
