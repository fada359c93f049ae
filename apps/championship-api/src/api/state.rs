use std::sync::Arc;

use crate::domain::repositories::{MatchRepository, TeamRepository};
use crate::services::{MatchService, TeamService};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<TeamService>,
    pub matches: Arc<MatchService>,
}

impl AppState {
    /// Wires the services over the given repositories
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        match_repository: Arc<dyn MatchRepository>,
    ) -> Self {
        let teams = Arc::new(TeamService::new(team_repository));
        let matches = Arc::new(MatchService::new(match_repository, teams.clone()));
        Self { teams, matches }
    }
}
