use crate::application::http::authentication::handlers::set_jwt_cookie;
use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum_cookie::CookieManager;
use serde::Serialize;
use utoipa::ToSchema;
use wayfarer_core::domain::authentication::ports::AuthService;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub status: String,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "authentication",
    summary = "Log in",
    description = "A wrong email and a wrong password are the same undifferentiated 401.",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Incorrect email or password")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    cookie: CookieManager,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let authenticated = state
        .service
        .login(payload.email, payload.password)
        .await
        .map_err(ApiError::from)?;

    set_jwt_cookie(&cookie, &authenticated.token);

    Ok(Response::OK(LoginResponse {
        status: "success".to_string(),
        token: authenticated.token,
    }))
}
