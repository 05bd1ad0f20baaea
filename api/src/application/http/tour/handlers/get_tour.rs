use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wayfarer_core::domain::tour::entities::Tour;
use wayfarer_core::domain::tour::ports::TourService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTourResponse {
    pub status: String,
    pub data: Tour,
}

#[utoipa::path(
    get,
    path = "/{tour_id}",
    tag = "tour",
    summary = "Get tour",
    params(
        ("tour_id" = Uuid, Path, description = "Tour id"),
    ),
    responses(
        (status = 200, body = GetTourResponse),
        (status = 404, description = "No tour with that id")
    ),
)]
pub async fn get_tour(
    Path(tour_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetTourResponse>, ApiError> {
    let tour = state.service.get_tour(tour_id).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetTourResponse {
        status: "success".to_string(),
        data: tour,
    }))
}
