use super::handlers::create_tour::{__path_create_tour, create_tour};
use super::handlers::delete_tour::{__path_delete_tour, delete_tour};
use super::handlers::get_top_cheap_tours::{__path_get_top_cheap_tours, get_top_cheap_tours};
use super::handlers::get_tour::{__path_get_tour, get_tour};
use super::handlers::get_tour_stats::{__path_get_tour_stats, get_tour_stats};
use super::handlers::get_tours::{__path_get_tours, get_tours};
use super::handlers::update_tour::{__path_update_tour, update_tour};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_tours,
    get_top_cheap_tours,
    get_tour_stats,
    get_tour,
    create_tour,
    update_tour,
    delete_tour
))]
pub struct TourApiDoc;

pub fn tour_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/tours"), get(get_tours))
        .route(&format!("{root_path}/tours"), post(create_tour))
        .route(
            &format!("{root_path}/tours/top-5-cheap"),
            get(get_top_cheap_tours),
        )
        .route(&format!("{root_path}/tours/stats"), get(get_tour_stats))
        .route(&format!("{root_path}/tours/{{tour_id}}"), get(get_tour))
        .route(&format!("{root_path}/tours/{{tour_id}}"), patch(update_tour))
        .route(
            &format!("{root_path}/tours/{{tour_id}}"),
            delete(delete_tour),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
