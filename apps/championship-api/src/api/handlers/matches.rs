use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::matches::MatchView;

/// Request body for registering a match
#[derive(Debug, Deserialize)]
pub struct RegisterMatchRequest {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
}

/// Request body for recording a match result
#[derive(Debug, Deserialize)]
pub struct EditMatchRequest {
    pub home_score: i32,
    pub away_score: i32,
}

/// Query string for listing matches
#[derive(Debug, Deserialize)]
pub struct ListMatchesQuery {
    /// Home team code
    pub team_code: Option<String>,
}

/// Register a scheduled match
///
/// POST /api/matches
pub async fn register_match(
    State(state): State<AppState>,
    Json(req): Json<RegisterMatchRequest>,
) -> Result<(StatusCode, Json<MatchView>), ApiError> {
    let view = state
        .matches
        .register_match(req.home_team_id, req.away_team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// List matches, optionally filtered by home team code
///
/// GET /api/matches?team_code=pal
pub async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<ListMatchesQuery>,
) -> Result<Json<Vec<MatchView>>, ApiError> {
    let views = state.matches.list_matches(query.team_code.as_deref()).await?;

    Ok(Json(views))
}

/// Get a match by ID
///
/// GET /api/matches/{id}
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchView>, ApiError> {
    Ok(Json(state.matches.get_match(id).await?))
}

/// Record a match result
///
/// PUT /api/matches/{id}
pub async fn edit_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EditMatchRequest>,
) -> Result<Json<MatchView>, ApiError> {
    let view = state
        .matches
        .edit_match(id, req.home_score, req.away_score)
        .await?;

    Ok(Json(view))
}
