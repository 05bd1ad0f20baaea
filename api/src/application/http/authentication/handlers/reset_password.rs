use crate::application::http::authentication::handlers::set_jwt_cookie;
use crate::application::http::authentication::validators::ResetPasswordValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum_cookie::CookieManager;
use serde::Serialize;
use utoipa::ToSchema;
use wayfarer_core::domain::authentication::ports::AuthService;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ResetPasswordResponse {
    pub status: String,
    pub token: String,
}

#[utoipa::path(
    patch,
    path = "/reset-password/{token}",
    tag = "authentication",
    summary = "Reset password",
    description = "Consumes the emailed reset token and logs the user in with a fresh JWT.",
    params(
        ("token" = String, Path, description = "Plaintext reset token from the email"),
    ),
    responses(
        (status = 200, body = ResetPasswordResponse),
        (status = 400, description = "Token is invalid or has expired")
    ),
    request_body = ResetPasswordValidator
)]
pub async fn reset_password(
    Path(token): Path<String>,
    State(state): State<AppState>,
    cookie: CookieManager,
    ValidateJson(payload): ValidateJson<ResetPasswordValidator>,
) -> Result<Response<ResetPasswordResponse>, ApiError> {
    let authenticated = state
        .service
        .reset_password(token, payload.password)
        .await
        .map_err(ApiError::from)?;

    set_jwt_cookie(&cookie, &authenticated.token);

    Ok(Response::OK(ResetPasswordResponse {
        status: "success".to_string(),
        token: authenticated.token,
    }))
}
