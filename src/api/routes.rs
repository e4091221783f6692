use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Outfits
        .route("/outfits", post(handlers::create_outfit))
        .route("/outfits/analyze", post(handlers::analyze_outfit))
        // Recommendations
        .route(
            "/recommendations/complete-outfit",
            post(handlers::complete_outfit),
        )
        .route("/recommendations/similar", post(handlers::similar_items))
        .route("/recommendations/daily", post(handlers::daily_recommendation))
}
