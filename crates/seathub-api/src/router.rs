//! Route definitions for the SeatHub HTTP API.
//!
//! API routes are mounted under `/api`; anything else falls through to the
//! configured static directory when it exists.

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes, without middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/workshop", get(handlers::workshop::get_workshop))
        .route("/register", post(handlers::registration::register))
        .route("/health", get(handlers::health::health));

    let router = Router::new().nest("/api", api_routes);

    let router = match state.config.server.static_dir.as_deref() {
        Some(dir) if Path::new(dir).is_dir() => {
            tracing::info!(dir = %dir, "Serving static files");
            router.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            tracing::debug!(dir = %dir, "Static directory not found, skipping");
            router
        }
        None => router,
    };

    router.with_state(state)
}
