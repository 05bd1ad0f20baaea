use crate::application::http::authentication::handlers::set_jwt_cookie;
use crate::application::http::authentication::validators::SignUpValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum_cookie::CookieManager;
use serde::Serialize;
use utoipa::ToSchema;
use wayfarer_core::domain::authentication::ports::AuthService;
use wayfarer_core::domain::authentication::value_objects::SignUpInput;
use wayfarer_core::domain::user::entities::User;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct SignUpResponse {
    pub status: String,
    pub token: String,
    pub data: User,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "authentication",
    summary = "Sign up",
    description = "Creates an account and logs it in; the token is returned in the body and mirrored as an http-only cookie.",
    responses(
        (status = 201, body = SignUpResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "An account with that email already exists")
    ),
    request_body = SignUpValidator
)]
pub async fn signup(
    State(state): State<AppState>,
    cookie: CookieManager,
    ValidateJson(payload): ValidateJson<SignUpValidator>,
) -> Result<Response<SignUpResponse>, ApiError> {
    let authenticated = state
        .service
        .sign_up(SignUpInput {
            name: payload.name,
            email: payload.email,
            photo_url: payload.photo_url,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    set_jwt_cookie(&cookie, &authenticated.token);

    Ok(Response::Created(SignUpResponse {
        status: "success".to_string(),
        token: authenticated.token,
        data: authenticated.user,
    }))
}
