use super::{ApplicationEnv, ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use tower_http::services::ServeDir;

pub fn create_application(
    env: &ApplicationEnv,
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    routing(ServeDir::new(&env.qr_code_directory))
        .with_state(application_state)
        .layer(application_middleware.body_limit)
        .layer(application_middleware.trace)
}
