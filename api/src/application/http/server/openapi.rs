use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::HealthApiDoc, tour::router::TourApiDoc,
    user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wayfarer API"
    ),
    nest(
        (path = "/tours", api = TourApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/users", api = AuthenticationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
