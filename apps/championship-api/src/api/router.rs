use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, matches, teams};
use super::state::AppState;

/// Builds the championship router with tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::register_team).get(teams::list_teams))
        .route("/api/teams/{id}", get(teams::get_team))
        // Match routes
        .route(
            "/api/matches",
            post(matches::register_match).get(matches::list_matches),
        )
        .route(
            "/api/matches/{id}",
            get(matches::get_match).put(matches::edit_match),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
