use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::value_objects::RawQuery,
    user::{
        entities::User,
        value_objects::{UpdateProfileInput, UpdateUserInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_users(
        &self,
        identity: Identity,
        params: RawQuery,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_user(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        identity: Identity,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn update_me(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_me(&self, identity: Identity) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Translator pipeline over active users; loose JSON rows because the
    /// projection is caller-controlled.
    fn fetch_users(
        &self,
        params: RawQuery,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Looks up the holder of an unexpired password-reset token by the
    /// token's sha-256 hex digest.
    fn get_by_reset_token(
        &self,
        token_hash: String,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
