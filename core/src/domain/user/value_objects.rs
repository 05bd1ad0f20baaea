#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub password_hash: String,
}

/// Admin-driven update of another user's account.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub role: Option<super::entities::UserRole>,
}

/// Self-service profile update; password fields are deliberately not
/// representable here.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}
