use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateMeValidator;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use wayfarer_core::domain::user::entities::User;
use wayfarer_core::domain::user::ports::UserService;
use wayfarer_core::domain::user::value_objects::UpdateProfileInput;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct UpdateMeResponse {
    pub status: String,
    pub data: User,
}

#[utoipa::path(
    patch,
    path = "/me",
    tag = "user",
    summary = "Update own profile",
    description = "Updates name, email or photo of the logged-in user. Password changes are rejected here and go through the password endpoints.",
    responses(
        (status = 200, body = UpdateMeResponse),
        (status = 400, description = "Unknown field in payload")
    ),
    request_body = UpdateMeValidator
)]
pub async fn update_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateMeValidator>,
) -> Result<Response<UpdateMeResponse>, ApiError> {
    let user = state
        .service
        .update_me(
            identity,
            UpdateProfileInput {
                name: payload.name,
                email: payload.email,
                photo_url: payload.photo_url,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateMeResponse {
        status: "success".to_string(),
        data: user,
    }))
}
