use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use wayfarer_core::domain::user::entities::User;
use wayfarer_core::domain::user::ports::UserService;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetUserResponse {
    pub status: String,
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 200, body = GetUserResponse),
        (status = 404, description = "No user with that id")
    ),
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state.service.get_user(user_id).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse {
        status: "success".to_string(),
        data: user,
    }))
}
