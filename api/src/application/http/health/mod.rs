use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use wayfarer_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ReadyResponse {
    pub status: String,
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness",
    responses((status = 200, body = HealthResponse)),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "success".to_string(),
        response_time_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness",
    description = "Round-trips the database and reports its latency.",
    responses((status = 200, body = ReadyResponse)),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadyResponse>, ApiError> {
    let database = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(ReadyResponse {
        status: "success".to_string(),
        database,
    }))
}

#[derive(OpenApi)]
#[openapi(paths(health, ready))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(ready))
}
