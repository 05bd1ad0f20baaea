use chrono::{TimeZone, Utc};

use crate::domain::user::entities::{User, UserRole};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            photo_url: model.photo_url,
            role: UserRole::from_str_or_default(&model.role),
            password_hash: model.password_hash,
            password_changed_at: model.password_changed_at.map(|dt| dt.and_utc()),
            password_reset_token: model.password_reset_token,
            password_reset_expires: model.password_reset_expires.map(|dt| dt.and_utc()),
            active: model.active,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
