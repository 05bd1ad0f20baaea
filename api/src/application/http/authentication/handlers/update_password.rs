use crate::application::auth::RequiredIdentity;
use crate::application::http::authentication::handlers::set_jwt_cookie;
use crate::application::http::authentication::validators::UpdatePasswordValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum_cookie::CookieManager;
use serde::Serialize;
use utoipa::ToSchema;
use wayfarer_core::domain::authentication::ports::AuthService;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct UpdatePasswordResponse {
    pub status: String,
    pub token: String,
}

#[utoipa::path(
    patch,
    path = "/update-password",
    tag = "authentication",
    summary = "Change password",
    description = "Requires the current password; earlier tokens stop working once the change lands.",
    responses(
        (status = 200, body = UpdatePasswordResponse),
        (status = 401, description = "Current password is wrong")
    ),
    request_body = UpdatePasswordValidator
)]
pub async fn update_password(
    State(state): State<AppState>,
    cookie: CookieManager,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePasswordValidator>,
) -> Result<Response<UpdatePasswordResponse>, ApiError> {
    let authenticated = state
        .service
        .update_password(identity, payload.password_current, payload.password)
        .await
        .map_err(ApiError::from)?;

    set_jwt_cookie(&cookie, &authenticated.token);

    Ok(Response::OK(UpdatePasswordResponse {
        status: "success".to_string(),
        token: authenticated.token,
    }))
}
