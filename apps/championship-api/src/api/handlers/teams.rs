use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::Team;

/// Request body for registering a team
#[derive(Debug, Deserialize)]
pub struct RegisterTeamRequest {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub region: String,
}

/// Query string for listing teams
///
/// `?region=` (empty value) is kept as `Some("")` and filters for teams
/// with an empty region.
#[derive(Debug, Deserialize)]
pub struct ListTeamsQuery {
    pub region: Option<String>,
}

/// Team as returned to clients
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub region: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            code: team.code().to_string(),
            region: team.region().to_string(),
        }
    }
}

/// Register a new team
///
/// POST /api/teams
pub async fn register_team(
    State(state): State<AppState>,
    Json(req): Json<RegisterTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state
        .teams
        .register_team(req.name, req.code, req.region)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List teams, optionally filtered by region
///
/// GET /api/teams?region=SP
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<ListTeamsQuery>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.list_teams(query.region.as_deref()).await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.get_team(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}
