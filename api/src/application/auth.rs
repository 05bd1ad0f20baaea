use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use wayfarer_core::domain::authentication::{ports::AuthService, value_objects::Identity};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Cookie the login/signup handlers mirror the bearer token into.
pub const JWT_COOKIE: &str = "jwt";

/// Optional auth middleware. When a bearer token (or jwt cookie) is
/// present and resolves to a live user, the identity is attached to the
/// request; otherwise the request continues anonymously and
/// `RequiredIdentity` rejects it at the handlers that need one.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(token) = token_from_request(&req)
        && let Ok(identity) = state.service.authenticate(token).await
    {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

fn token_from_request(req: &Request) -> Option<String> {
    if let Some(auth_header) = req.headers().get("authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        return Some(token.to_string());
    }

    // Browser clients send the token back as the jwt cookie.
    let cookie_header = req.headers().get("cookie")?.to_str().ok()?;
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == JWT_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

/// Extractor for routes that refuse anonymous requests.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "you are not logged in, please log in to get access".to_string(),
                )
            })
    }
}
