use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use uuid::Uuid;
use wayfarer_core::domain::tour::ports::TourService;

#[utoipa::path(
    delete,
    path = "/{tour_id}",
    tag = "tour",
    summary = "Delete tour",
    description = "Restricted to admins and lead guides.",
    params(
        ("tour_id" = Uuid, Path, description = "Tour id"),
    ),
    responses(
        (status = 204, description = "Tour deleted"),
        (status = 403, description = "Caller lacks a staff role"),
        (status = 404, description = "No tour with that id")
    ),
)]
pub async fn delete_tour(
    Path(tour_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_tour(identity, tour_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
