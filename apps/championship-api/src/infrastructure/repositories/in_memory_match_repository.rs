use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::matches::Match;
use crate::domain::repositories::MatchRepository;

/// In-memory implementation of MatchRepository
#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    matches: RwLock<Vec<Match>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: Vec<Match>) -> Self {
        Self {
            matches: RwLock::new(matches),
        }
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn save(&self, game: &Match) -> Result<(), String> {
        let mut matches = self
            .matches
            .write()
            .map_err(|e| format!("Failed to acquire write lock: {}", e))?;

        match matches.iter_mut().find(|m| m.id() == game.id()) {
            Some(existing) => *existing = game.clone(),
            None => matches.push(game.clone()),
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Match>, String> {
        let matches = self
            .matches
            .read()
            .map_err(|e| format!("Failed to acquire read lock: {}", e))?;

        Ok(matches.iter().find(|m| m.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Match>, String> {
        let matches = self
            .matches
            .read()
            .map_err(|e| format!("Failed to acquire read lock: {}", e))?;

        Ok(matches.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matches::MatchStatus;

    #[tokio::test]
    async fn save_updates_existing_match_in_place() {
        let repo = InMemoryMatchRepository::new();
        let mut game = Match::new(Uuid::new_v4(), Uuid::new_v4());
        repo.save(&game).await.unwrap();

        game.record_score(3, 0).unwrap();
        repo.save(&game).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status(), MatchStatus::Played);
        assert_eq!(all[0].home_score(), Some(3));
    }

    #[tokio::test]
    async fn find_by_id_unknown_returns_none() {
        let repo = InMemoryMatchRepository::with_matches(vec![Match::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
        )]);

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
