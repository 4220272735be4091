pub mod handlers;
pub mod types;

use crate::config::Config;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub fn router(config: &Config) -> Router {
    let app_state = handlers::AppState {
        variant: config.service.variant,
    };

    let routes = Router::new()
        .route("/", get(handlers::root).fallback(handlers::method_not_allowed))
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/predict",
            post(handlers::predict_audio).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .with_state(app_state);

    with_middleware(routes, config.server.cors)
}

/// Wraps `router` with panic recovery, request tracing and optionally CORS.
///
/// Only routes already present on `router` are covered.
pub fn with_middleware(router: Router, cors: bool) -> Router {
    let router = router
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
