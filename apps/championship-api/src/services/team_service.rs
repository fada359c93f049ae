//! Team registration and lookup.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::{ChampionshipError, ChampionshipResult};

/// Service for registering and listing teams
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Register a new team
    ///
    /// # Errors
    /// - `Validation`: name or code is empty
    /// - `Storage`: the repository failed
    pub async fn register_team(
        &self,
        name: String,
        code: String,
        region: String,
    ) -> ChampionshipResult<Team> {
        let team = Team::new(name, code, region).map_err(ChampionshipError::Validation)?;

        self.repository
            .save(&team)
            .await
            .map_err(ChampionshipError::Storage)?;

        info!(team_id = %team.id(), code = %team.code(), region = %team.region(), "Team registered");
        Ok(team)
    }

    /// List teams, optionally restricted to one region
    ///
    /// `None` returns every team. `Some(region)` is an exact, case-sensitive
    /// match, and `Some("")` selects teams registered with an empty region.
    pub async fn list_teams(&self, region: Option<&str>) -> ChampionshipResult<Vec<Team>> {
        let teams = match region {
            Some(region) => self.repository.find_by_region(region).await,
            None => self.repository.find_all().await,
        }
        .map_err(ChampionshipError::Storage)?;

        debug!(?region, count = teams.len(), "Listed teams");
        Ok(teams)
    }

    /// Get a team by ID
    pub async fn get_team(&self, id: Uuid) -> ChampionshipResult<Team> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(ChampionshipError::Storage)?
            .ok_or(ChampionshipError::TeamNotFound(id))
    }
}
