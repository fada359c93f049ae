use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::matches::Match;

/// Repository trait for Match records
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Save a match (insert or update)
    async fn save(&self, game: &Match) -> Result<(), String>;

    /// Find a match by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Match>, String>;

    /// Find every match
    async fn find_all(&self) -> Result<Vec<Match>, String>;
}
