use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{bets, health};
use super::state::AppState;

/// Builds the betting router with tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Bet routes
        .route("/api/bets", post(bets::place_bet).get(bets::list_bets))
        .route("/api/bets/{id}", get(bets::get_bet))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
