use super::handlers::delete_me::{__path_delete_me, delete_me};
use super::handlers::delete_user::{__path_delete_user, delete_user};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_users::{__path_get_users, get_users};
use super::handlers::update_me::{__path_update_me, update_me};
use super::handlers::update_user::{__path_update_user, update_user};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, get_user, update_user, delete_user, update_me, delete_me))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/users"), get(get_users))
        .route(&format!("{root_path}/users/me"), patch(update_me))
        .route(&format!("{root_path}/users/me"), delete(delete_me))
        .route(&format!("{root_path}/users/{{user_id}}"), get(get_user))
        .route(&format!("{root_path}/users/{{user_id}}"), patch(update_user))
        .route(
            &format!("{root_path}/users/{{user_id}}"),
            delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
