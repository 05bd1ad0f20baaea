use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tour::validators::UpdateTourValidator;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use wayfarer_core::domain::tour::entities::Tour;
use wayfarer_core::domain::tour::ports::TourService;
use wayfarer_core::domain::tour::value_objects::UpdateTourInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateTourResponse {
    pub status: String,
    pub data: Tour,
}

#[utoipa::path(
    patch,
    path = "/{tour_id}",
    tag = "tour",
    summary = "Update tour",
    description = "Partial update; absent fields keep their current value.",
    params(
        ("tour_id" = Uuid, Path, description = "Tour id"),
    ),
    responses(
        (status = 200, body = UpdateTourResponse),
        (status = 404, description = "No tour with that id")
    ),
    request_body = UpdateTourValidator
)]
pub async fn update_tour(
    Path(tour_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateTourValidator>,
) -> Result<Response<UpdateTourResponse>, ApiError> {
    let tour = state
        .service
        .update_tour(
            identity,
            tour_id,
            UpdateTourInput {
                name: payload.name,
                duration: payload.duration,
                max_group_size: payload.max_group_size,
                difficulty: payload.difficulty,
                price: payload.price,
                price_discount: payload.price_discount,
                summary: payload.summary,
                description: payload.description,
                image_cover: payload.image_cover,
                images: payload.images,
                start_dates: payload.start_dates,
                secret_tour: payload.secret_tour,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateTourResponse {
        status: "success".to_string(),
        data: tour,
    }))
}
