use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use wayfarer_core::domain::user::ports::UserService;

#[utoipa::path(
    delete,
    path = "/me",
    tag = "user",
    summary = "Deactivate own account",
    description = "Soft delete; the account disappears from listings and can no longer log in.",
    responses(
        (status = 204, description = "Account deactivated")
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state.service.delete_me(identity).await.map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
