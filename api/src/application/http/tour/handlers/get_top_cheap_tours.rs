use crate::application::http::query_extractor::RawQueryExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tour::handlers::get_tours::GetToursResponse;
use axum::extract::State;
use wayfarer_core::domain::tour::ports::TourService;

#[utoipa::path(
    get,
    path = "/top-5-cheap",
    tag = "tour",
    summary = "Top five cheap tours",
    description = "Alias over the tour listing that seeds the five cheapest, best-rated tours with a compact projection. Explicit query parameters still win over the seeded ones.",
    responses(
        (status = 200, body = GetToursResponse)
    ),
)]
pub async fn get_top_cheap_tours(
    State(state): State<AppState>,
    RawQueryExtractor(mut params): RawQueryExtractor,
) -> Result<Response<GetToursResponse>, ApiError> {
    params.set_default("page", "1");
    params.set_default("limit", "5");
    params.set_default("sort", "price,-ratings_average");
    params.set_default("fields", "name,price,ratings_average,summary,difficulty");

    let tours = state.service.get_tours(params).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetToursResponse {
        status: "success".to_string(),
        results: tours.len(),
        data: tours,
    }))
}
