//! Match registration, score editing and lookup.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::team_service::TeamService;
use crate::domain::matches::{Match, MatchView};
use crate::domain::repositories::MatchRepository;
use crate::domain::team::Team;
use crate::domain::{ChampionshipError, ChampionshipResult};

/// Service for registering matches and recording their results
pub struct MatchService {
    repository: Arc<dyn MatchRepository>,
    teams: Arc<TeamService>,
}

impl MatchService {
    pub fn new(repository: Arc<dyn MatchRepository>, teams: Arc<TeamService>) -> Self {
        Self { repository, teams }
    }

    /// Register a scheduled match between two existing teams
    ///
    /// # Errors
    /// - `TeamNotFound`: either team id is unknown
    pub async fn register_match(
        &self,
        home_team_id: Uuid,
        away_team_id: Uuid,
    ) -> ChampionshipResult<MatchView> {
        let home = self.teams.get_team(home_team_id).await?;
        let away = self.teams.get_team(away_team_id).await?;

        let game = Match::new(home.id(), away.id());
        self.repository
            .save(&game)
            .await
            .map_err(ChampionshipError::Storage)?;

        info!(
            match_id = %game.id(),
            home = %home.code(),
            away = %away.code(),
            "Match registered"
        );
        Ok(MatchView::new(&game, &home, &away))
    }

    /// List matches, optionally restricted to one home team code
    ///
    /// Only the home team's code is compared; a team's away matches are
    /// never returned by the filter.
    pub async fn list_matches(&self, team_code: Option<&str>) -> ChampionshipResult<Vec<MatchView>> {
        let games = self
            .repository
            .find_all()
            .await
            .map_err(ChampionshipError::Storage)?;

        let teams: HashMap<Uuid, Team> = self
            .teams
            .list_teams(None)
            .await?
            .into_iter()
            .map(|t| (t.id(), t))
            .collect();

        let mut views = Vec::with_capacity(games.len());
        for game in &games {
            let home = lookup(&teams, game.home_team_id())?;
            if let Some(code) = team_code {
                if home.code() != code {
                    continue;
                }
            }
            let away = lookup(&teams, game.away_team_id())?;
            views.push(MatchView::new(game, home, away));
        }

        debug!(?team_code, count = views.len(), "Listed matches");
        Ok(views)
    }

    /// Record a match's final score and mark it played
    ///
    /// # Errors
    /// - `MatchNotFound`: the match id is unknown
    pub async fn edit_match(
        &self,
        id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> ChampionshipResult<MatchView> {
        let mut game = self.find(id).await?;

        game.record_score(home_score, away_score)
            .map_err(ChampionshipError::Validation)?;
        self.repository
            .save(&game)
            .await
            .map_err(ChampionshipError::Storage)?;

        info!(match_id = %id, home_score, away_score, "Match result recorded");
        self.view(&game).await
    }

    /// Get a match with both teams resolved
    ///
    /// # Errors
    /// - `MatchNotFound`: the match id is unknown
    pub async fn get_match(&self, id: Uuid) -> ChampionshipResult<MatchView> {
        let game = self.find(id).await?;
        self.view(&game).await
    }

    async fn find(&self, id: Uuid) -> ChampionshipResult<Match> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(ChampionshipError::Storage)?
            .ok_or(ChampionshipError::MatchNotFound(id))
    }

    async fn view(&self, game: &Match) -> ChampionshipResult<MatchView> {
        let home = self.teams.get_team(game.home_team_id()).await?;
        let away = self.teams.get_team(game.away_team_id()).await?;
        Ok(MatchView::new(game, &home, &away))
    }
}

fn lookup(teams: &HashMap<Uuid, Team>, id: Uuid) -> ChampionshipResult<&Team> {
    teams.get(&id).ok_or(ChampionshipError::TeamNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matches::MatchStatus;
    use crate::infrastructure::repositories::{InMemoryMatchRepository, InMemoryTeamRepository};

    struct Fixture {
        service: MatchService,
        home: Team,
        away: Team,
    }

    fn team(name: &str, code: &str) -> Team {
        Team::new(name.to_string(), code.to_string(), "SP".to_string()).unwrap()
    }

    fn fixture() -> Fixture {
        let home = team("Time 1", "time-1");
        let away = team("Time 2", "time-2");
        let teams = Arc::new(TeamService::new(Arc::new(
            InMemoryTeamRepository::with_teams(vec![home.clone(), away.clone()]),
        )));
        let service = MatchService::new(Arc::new(InMemoryMatchRepository::new()), teams);

        Fixture {
            service,
            home,
            away,
        }
    }

    #[tokio::test]
    async fn register_match_resolves_team_names() {
        let f = fixture();

        let view = f
            .service
            .register_match(f.home.id(), f.away.id())
            .await
            .unwrap();

        assert_eq!(view.home_team_name, "Time 1");
        assert_eq!(view.away_team_name, "Time 2");
        assert_eq!(view.status, MatchStatus::Scheduled);
        assert!(view.home_score.is_none());
        assert!(view.away_score.is_none());
        assert_eq!(f.service.get_match(view.id).await.unwrap(), view);
    }

    #[tokio::test]
    async fn register_match_with_unknown_team_fails() {
        let f = fixture();
        let missing = Uuid::new_v4();

        let result = f.service.register_match(f.home.id(), missing).await;

        assert!(matches!(result, Err(ChampionshipError::TeamNotFound(id)) if id == missing));
        assert!(f.service.list_matches(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_matches_without_filter_returns_all() {
        let f = fixture();
        f.service.register_match(f.home.id(), f.away.id()).await.unwrap();
        f.service.register_match(f.away.id(), f.home.id()).await.unwrap();

        let views = f.service.list_matches(None).await.unwrap();

        assert_eq!(views.len(), 2);
    }

    #[tokio::test]
    async fn list_matches_filters_on_home_team_only() {
        let f = fixture();
        let home_game = f.service.register_match(f.home.id(), f.away.id()).await.unwrap();
        f.service.register_match(f.away.id(), f.home.id()).await.unwrap();

        let views = f.service.list_matches(Some("time-1")).await.unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, home_game.id);
        assert_eq!(views[0].home_team_name, "Time 1");
        assert_eq!(views[0].away_team_name, "Time 2");
    }

    #[tokio::test]
    async fn list_matches_with_unknown_code_is_empty() {
        let f = fixture();
        f.service.register_match(f.home.id(), f.away.id()).await.unwrap();

        assert!(f.service.list_matches(Some("nobody")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_match_records_score_and_marks_played() {
        let f = fixture();
        let view = f.service.register_match(f.home.id(), f.away.id()).await.unwrap();

        let edited = f.service.edit_match(view.id, 2, 3).await.unwrap();

        assert_eq!(edited.home_score, Some(2));
        assert_eq!(edited.away_score, Some(3));
        assert_eq!(edited.status, MatchStatus::Played);
        assert_eq!(edited.home_team_name, "Time 1");
        assert_eq!(edited.away_team_name, "Time 2");
        assert_eq!(f.service.get_match(view.id).await.unwrap(), edited);
    }

    #[tokio::test]
    async fn edit_unknown_match_fails() {
        let f = fixture();

        let result = f.service.edit_match(Uuid::new_v4(), 1, 0).await;

        assert!(matches!(result, Err(ChampionshipError::MatchNotFound(_))));
    }

    #[tokio::test]
    async fn get_unknown_match_fails() {
        let f = fixture();
        let id = Uuid::new_v4();

        let result = f.service.get_match(id).await;

        assert!(matches!(result, Err(ChampionshipError::MatchNotFound(missing)) if missing == id));
    }
}
