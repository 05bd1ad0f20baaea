use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, query::value_objects::RawQuery,
    user::entities::User, user::ports::UserRepository,
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::{map_db_err, query::features::ApiFeatures};

const SEARCH_FIELDS: [&str; 2] = ["name", "email"];

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

fn to_active_model(user: User) -> UserActiveModel {
    UserActiveModel {
        id: Set(user.id),
        name: Set(user.name),
        email: Set(user.email),
        photo_url: Set(user.photo_url),
        role: Set(user.role.as_str().to_string()),
        password_hash: Set(user.password_hash),
        password_changed_at: Set(user.password_changed_at.map(|dt| dt.naive_utc())),
        password_reset_token: Set(user.password_reset_token),
        password_reset_expires: Set(user.password_reset_expires.map(|dt| dt.naive_utc())),
        active: Set(user.active),
        created_at: Set(user.created_at.naive_utc()),
        updated_at: Set(user.updated_at.naive_utc()),
        revision: sea_orm::ActiveValue::NotSet,
    }
}

impl UserRepository for PostgresUserRepository {
    async fn fetch_users(&self, params: RawQuery) -> Result<Vec<JsonValue>, CoreError> {
        let base = UserEntity::find().filter(UserColumn::Active.eq(true));
        let features = ApiFeatures::new(base, params)
            .filter()
            .sort()
            .limit_fields()
            .paginate()
            .search(&SEARCH_FIELDS);

        if features.page_was_requested() {
            let total = features
                .count(self.db.as_ref())
                .await
                .map_err(|e| map_db_err("failed to count users", e))?;
            if features.skip() >= total {
                return Err(CoreError::PageNotFound);
            }
        }

        features
            .into_inner()
            .into_json()
            .all(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to fetch users", e))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to get user by id", e))?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to get user by email", e))?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_reset_token(
        &self,
        token_hash: String,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::PasswordResetToken.eq(token_hash))
            .filter(UserColumn::PasswordResetExpires.gt(now.naive_utc()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to get user by reset token", e))?
            .map(User::from);

        Ok(user)
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        UserEntity::insert(to_active_model(user))
            .exec_with_returning(self.db.as_ref())
            .await
            .map(User::from)
            .map_err(|e| map_db_err("failed to create user", e))
    }

    async fn update(&self, user: User) -> Result<User, CoreError> {
        let mut model = to_active_model(user);
        model.updated_at = Set(Utc::now().naive_utc());

        UserEntity::update(model)
            .exec(self.db.as_ref())
            .await
            .map(User::from)
            .map_err(|e| map_db_err("failed to update user", e))
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), CoreError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to delete user", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::*;

    #[tokio::test]
    async fn explicit_page_past_the_result_set_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                Value::BigInt(Some(1)),
            )])]])
            .into_connection();
        let repository = PostgresUserRepository::new(db);

        let mut params = RawQuery::new();
        params.insert("page", "2");
        params.insert("limit", "10");

        let result = repository.fetch_users(params).await;
        assert_eq!(result, Err(CoreError::PageNotFound));
    }
}
