use crate::application::auth::RequiredIdentity;
use crate::application::http::query_extractor::RawQueryExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use wayfarer_core::domain::user::ports::UserService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUsersResponse {
    pub status: String,
    pub results: usize,
    pub data: Vec<JsonValue>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "List users",
    description = "Lists active users through the same query pipeline as the tour listing, with free-text search over name and email.",
    responses(
        (status = 200, body = GetUsersResponse)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    RawQueryExtractor(params): RawQueryExtractor,
) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state
        .service
        .get_users(identity, params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse {
        status: "success".to_string(),
        results: users.len(),
        data: users,
    }))
}
