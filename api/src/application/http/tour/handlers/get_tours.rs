use crate::application::http::query_extractor::RawQueryExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use wayfarer_core::domain::tour::ports::TourService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetToursResponse {
    pub status: String,
    pub results: usize,
    pub data: Vec<JsonValue>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "tour",
    summary = "List tours",
    description = "Lists public tours. Supports field filters with optional [gte]/[gt]/[lte]/[lt] operators, sort, fields projection, page/limit pagination and free-text search over name and summary.",
    responses(
        (status = 200, body = GetToursResponse),
        (status = 400, description = "Unknown column or malformed filter value"),
        (status = 404, description = "Requested page is past the end of the result set")
    ),
)]
pub async fn get_tours(
    State(state): State<AppState>,
    RawQueryExtractor(params): RawQueryExtractor,
) -> Result<Response<GetToursResponse>, ApiError> {
    let tours = state.service.get_tours(params).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetToursResponse {
        status: "success".to_string(),
        results: tours.len(),
        data: tours,
    }))
}
