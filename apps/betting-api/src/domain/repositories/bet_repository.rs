use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bet::Bet;

/// Repository trait for Bet records
#[async_trait]
pub trait BetRepository: Send + Sync {
    /// Save a bet (insert or update)
    async fn save(&self, bet: &Bet) -> Result<(), String>;

    /// Find a bet by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bet>, String>;

    /// Find every bet, in placement order
    async fn find_all(&self) -> Result<Vec<Bet>, String>;
}
