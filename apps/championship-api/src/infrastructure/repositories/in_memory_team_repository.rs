use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Keeps teams in registration order. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with teams
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams: RwLock::new(teams),
        }
    }

    fn filtered(&self, keep: impl Fn(&Team) -> bool) -> Result<Vec<Team>, String> {
        let teams = self
            .teams
            .read()
            .map_err(|e| format!("Failed to acquire read lock: {}", e))?;

        Ok(teams.iter().filter(|t| keep(*t)).cloned().collect())
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut teams = self
            .teams
            .write()
            .map_err(|e| format!("Failed to acquire write lock: {}", e))?;

        match teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => teams.push(team.clone()),
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self.filtered(|t| t.id() == id)?.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        self.filtered(|_| true)
    }

    async fn find_by_region(&self, region: &str) -> Result<Vec<Team>, String> {
        self.filtered(|t| t.region() == region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, code: &str, region: &str) -> Team {
        Team::new(name.to_string(), code.to_string(), region.to_string()).unwrap()
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repo = InMemoryTeamRepository::new();
        let t = team("Time 1", "time-1", "SP");

        repo.save(&t).await.unwrap();

        assert_eq!(repo.find_by_id(t.id()).await.unwrap(), Some(t));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_twice_does_not_duplicate() {
        let repo = InMemoryTeamRepository::new();
        let t = team("Time 1", "time-1", "SP");

        repo.save(&t).await.unwrap();
        repo.save(&t).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_region_is_exact_and_case_sensitive() {
        let repo = InMemoryTeamRepository::with_teams(vec![
            team("Time 1", "time-1", "SP"),
            team("Time 2", "time-2", "sp"),
            team("Time 3", "time-3", "SPX"),
            team("Time 4", "time-4", ""),
        ]);

        let sp = repo.find_by_region("SP").await.unwrap();
        assert_eq!(sp.len(), 1);
        assert_eq!(sp[0].code(), "time-1");

        let empty = repo.find_by_region("").await.unwrap();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].code(), "time-4");
    }

    #[tokio::test]
    async fn find_all_keeps_registration_order() {
        let repo = InMemoryTeamRepository::new();
        for code in ["a", "b", "c"] {
            repo.save(&team(code, code, "SP")).await.unwrap();
        }

        let codes: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|t| t.code().to_string())
            .collect();

        assert_eq!(codes, vec!["a", "b", "c"]);
    }
}
