use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wayfarer_core::domain::tour::entities::TourStats;
use wayfarer_core::domain::tour::ports::TourService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTourStatsResponse {
    pub status: String,
    pub data: Vec<TourStats>,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "tour",
    summary = "Tour statistics",
    description = "Aggregates well-rated public tours per difficulty: count, average rating, average/min/max price.",
    responses(
        (status = 200, body = GetTourStatsResponse)
    ),
)]
pub async fn get_tour_stats(
    State(state): State<AppState>,
) -> Result<Response<GetTourStatsResponse>, ApiError> {
    let stats = state.service.get_tour_stats().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetTourStatsResponse {
        status: "success".to_string(),
        data: stats,
    }))
}
