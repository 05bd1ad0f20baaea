use chrono::Utc;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    mailer::ports::MailerRepository,
    query::value_objects::RawQuery,
    tour::ports::TourRepository,
    user::{
        entities::User,
        policies,
        ports::{UserRepository, UserService},
        value_objects::{UpdateProfileInput, UpdateUserInput},
    },
};

impl<T, U, H, HC, M> UserService for Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    async fn get_users(
        &self,
        _identity: Identity,
        params: RawQuery,
    ) -> Result<Vec<JsonValue>, CoreError> {
        self.user_repository.fetch_users(params).await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_user(
        &self,
        identity: Identity,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, CoreError> {
        ensure_policy(
            policies::can_manage_users(&identity),
            "user administration requires the admin role",
        )?;

        let mut user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        apply_profile_fields(&mut user, input.name, input.email, input.photo_url);
        if let Some(role) = input.role {
            user.role = role;
        }

        self.user_repository.update(user).await
    }

    async fn delete_user(&self, identity: Identity, user_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            policies::can_manage_users(&identity),
            "user administration requires the admin role",
        )?;

        self.user_repository.delete(user_id).await
    }

    async fn update_me(
        &self,
        identity: Identity,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        let Identity::User(mut user) = identity;

        apply_profile_fields(&mut user, input.name, input.email, input.photo_url);

        self.user_repository.update(user).await
    }

    async fn delete_me(&self, identity: Identity) -> Result<(), CoreError> {
        let Identity::User(mut user) = identity;

        // Soft delete; the account disappears from queries but the row
        // stays around.
        user.active = false;
        user.updated_at = Utc::now();

        self.user_repository.update(user).await?;

        Ok(())
    }
}

fn apply_profile_fields(
    user: &mut User,
    name: Option<String>,
    email: Option<String>,
    photo_url: Option<String>,
) {
    if let Some(name) = name {
        user.name = name;
    }
    if let Some(email) = email {
        user.email = email;
    }
    if photo_url.is_some() {
        user.photo_url = photo_url;
    }
    user.updated_at = Utc::now();
}
