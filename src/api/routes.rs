//! API Routes
//!
//! Assembles the sub-routers and the middleware stack.

use axum::{
    extract::State,
    http::{header, HeaderName, Method},
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::preprocess::preprocess;
use super::registry::ApiCall;
use super::{character, item, world, AppState};
use crate::models::HealthResponse;

/// Creates the main router.
///
/// # Middleware (outermost first)
/// - Tracing: request spans
/// - CORS: answers preflight requests
/// - Preprocessor: legacy URL rewrite and CORS headers, before routing
/// - Compression: gzip for the `/api/{world,item,character}` groups
/// - Response cache: item routes only, when enabled
pub fn create_router(state: AppState) -> Router {
    let groups = Router::new()
        .nest("/api/world", world::router())
        .nest("/api/item", item::router(state.cache.clone()))
        .nest("/api/character", character::router())
        .layer(CompressionLayer::new());

    let api = groups
        .route("/api/calls", get(calls_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    // The API sits behind a fallback so the preprocessor can change the URI
    // before the inner router matches it.
    Router::new()
        .fallback_service(api)
        .layer(middleware::from_fn(preprocess))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

/// Handler for GET /api/calls
async fn calls_handler(State(state): State<AppState>) -> Json<Vec<ApiCall>> {
    Json(state.registry.calls().to_vec())
}

/// Handler for GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
