//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{health_handler, stats_handler, videos_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /videos` and `GET /api/youtube/videos` - Channel video listing
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows the configured origin (`*` for any)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&state.cors_origin))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/videos", get(videos_handler))
        .route("/api/youtube/videos", get(videos_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn allow_origin(origin: &str) -> AllowOrigin {
    if origin == "*" {
        return AllowOrigin::any();
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            warn!("Invalid CORS_ORIGIN {:?}, allowing any origin", origin);
            AllowOrigin::any()
        }
    }
}
