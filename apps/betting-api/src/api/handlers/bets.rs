use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::bet::{Bet, BetStatus, MatchStatus, Outcome};

/// Request body for placing a bet
#[derive(Debug, Deserialize)]
pub struct PlaceBetRequest {
    pub match_id: Uuid,
    pub predicted: Outcome,
}

/// Bet as returned to clients
#[derive(Debug, Serialize)]
pub struct BetResponse {
    pub id: Uuid,
    pub match_id: Uuid,
    pub predicted: Outcome,
    pub match_status: MatchStatus,
    pub status: BetStatus,
    pub placed_at: DateTime<Utc>,
    pub settled_at: Option<DateTime<Utc>>,
}

impl From<&Bet> for BetResponse {
    fn from(bet: &Bet) -> Self {
        Self {
            id: bet.id(),
            match_id: bet.match_id(),
            predicted: bet.predicted(),
            match_status: bet.match_status(),
            status: bet.status(),
            placed_at: bet.placed_at(),
            settled_at: bet.settled_at(),
        }
    }
}

/// Place a bet on a match
///
/// POST /api/bets
pub async fn place_bet(
    State(state): State<AppState>,
    Json(req): Json<PlaceBetRequest>,
) -> Result<(StatusCode, Json<BetResponse>), ApiError> {
    let bet = state.bets.place_bet(req.match_id, req.predicted).await?;

    Ok((StatusCode::CREATED, Json(BetResponse::from(&bet))))
}

/// List all bets without settling them
///
/// GET /api/bets
pub async fn list_bets(State(state): State<AppState>) -> Result<Json<Vec<BetResponse>>, ApiError> {
    let bets = state.bets.list_bets().await?;

    Ok(Json(bets.iter().map(BetResponse::from).collect()))
}

/// Get a bet by ID, settling it if its match has been played
///
/// GET /api/bets/{id}
pub async fn get_bet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BetResponse>, ApiError> {
    let bet = state.bets.get_bet(id).await?;

    Ok(Json(BetResponse::from(&bet)))
}
