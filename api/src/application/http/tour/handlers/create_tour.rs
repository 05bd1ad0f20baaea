use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tour::validators::CreateTourValidator;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wayfarer_core::domain::tour::entities::Tour;
use wayfarer_core::domain::tour::ports::TourService;
use wayfarer_core::domain::tour::value_objects::CreateTourInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateTourResponse {
    pub status: String,
    pub data: Tour,
}

#[utoipa::path(
    post,
    path = "",
    tag = "tour",
    summary = "Create tour",
    responses(
        (status = 201, body = CreateTourResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "A tour with that name already exists")
    ),
    request_body = CreateTourValidator
)]
pub async fn create_tour(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateTourValidator>,
) -> Result<Response<CreateTourResponse>, ApiError> {
    let tour = state
        .service
        .create_tour(
            identity,
            CreateTourInput {
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

    Ok(Response::Created(CreateTourResponse {
        status: "success".to_string(),
        data: tour,
    }))
}
