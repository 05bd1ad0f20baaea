use crate::application::http::authentication::validators::ForgotPasswordValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use wayfarer_core::domain::authentication::ports::AuthService;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ForgotPasswordResponse {
    pub status: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/forgot-password",
    tag = "authentication",
    summary = "Request password reset",
    description = "Emails a reset link that stays valid for ten minutes.",
    responses(
        (status = 200, body = ForgotPasswordResponse),
        (status = 404, description = "No account with that email"),
        (status = 500, description = "The reset email could not be sent")
    ),
    request_body = ForgotPasswordValidator
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ForgotPasswordValidator>,
) -> Result<Response<ForgotPasswordResponse>, ApiError> {
    state
        .service
        .forgot_password(payload.email)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ForgotPasswordResponse {
        status: "success".to_string(),
        message: "token sent to email".to_string(),
    }))
}
