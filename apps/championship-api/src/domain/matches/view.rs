use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Match;
use super::value_objects::MatchStatus;
use crate::domain::team::Team;

/// Read model of a match with both teams resolved
///
/// This is the JSON body of `GET /api/matches/{id}`, which the betting
/// service reads to settle bets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub id: Uuid,
    pub home_team_id: Uuid,
    pub home_team_name: String,
    pub home_team_code: String,
    pub away_team_id: Uuid,
    pub away_team_name: String,
    pub away_team_code: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
}

impl MatchView {
    pub fn new(game: &Match, home: &Team, away: &Team) -> Self {
        Self {
            id: game.id(),
            home_team_id: home.id(),
            home_team_name: home.name().to_string(),
            home_team_code: home.code().to_string(),
            away_team_id: away.id(),
            away_team_name: away.name().to_string(),
            away_team_code: away.code().to_string(),
            home_score: game.home_score(),
            away_score: game.away_score(),
            status: game.status(),
        }
    }
}
