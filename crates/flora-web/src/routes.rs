//! Application routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::health::health;
use crate::handlers::identify::identify;
use crate::handlers::index::index;
use crate::middleware::{cors_layer, request_logging};
use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/identify", post(identify));

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .route("/health", get(health))
        // Uploads go through the multipart extractor; raise its cap along
        // with the outer body limit
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
