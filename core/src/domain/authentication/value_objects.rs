use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::{User, UserRole};

/// The authenticated principal attached to a request once its token
/// has been verified.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Identity::User(user) => user.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub password: String,
}
