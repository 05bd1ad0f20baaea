pub mod forgot_password;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod update_password;

use axum_cookie::prelude::*;

use crate::application::auth::JWT_COOKIE;

/// Mirrors the bearer token into an http-only cookie for browser
/// clients.
pub(crate) fn set_jwt_cookie(cookie: &CookieManager, token: &str) {
    cookie.add(
        Cookie::builder(JWT_COOKIE, token.to_string())
            .http_only(true)
            .path("/")
            .build(),
    );
}
