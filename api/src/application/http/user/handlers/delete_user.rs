use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use uuid::Uuid;
use wayfarer_core::domain::user::ports::UserService;

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "user",
    summary = "Delete user",
    description = "Admin-only hard delete.",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No user with that id")
    ),
)]
pub async fn delete_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_user(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
