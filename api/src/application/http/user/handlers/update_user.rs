use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateUserValidator;
use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use wayfarer_core::domain::user::entities::User;
use wayfarer_core::domain::user::ports::UserService;
use wayfarer_core::domain::user::value_objects::UpdateUserInput;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct UpdateUserResponse {
    pub status: String,
    pub data: User,
}

#[utoipa::path(
    patch,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    description = "Admin-only account update, including role changes.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = UpdateUserResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No user with that id")
    ),
    request_body = UpdateUserValidator
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<UpdateUserResponse>, ApiError> {
    let user = state
        .service
        .update_user(
            identity,
            user_id,
            UpdateUserInput {
                name: payload.name,
                email: payload.email,
                photo_url: payload.photo_url,
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateUserResponse {
        status: "success".to_string(),
        data: user,
    }))
}
