use super::handlers::forgot_password::{__path_forgot_password, forgot_password};
use super::handlers::login::{__path_login, login};
use super::handlers::reset_password::{__path_reset_password, reset_password};
use super::handlers::signup::{__path_signup, signup};
use super::handlers::update_password::{__path_update_password, update_password};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(signup, login, forgot_password, reset_password, update_password))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/users/signup"), post(signup))
        .route(&format!("{root_path}/users/login"), post(login))
        .route(
            &format!("{root_path}/users/forgot-password"),
            post(forgot_password),
        )
        .route(
            &format!("{root_path}/users/reset-password/{{token}}"),
            patch(reset_password),
        )
        .route(
            &format!("{root_path}/users/update-password"),
            patch(update_password),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
