use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::bet::Bet;
use crate::domain::repositories::BetRepository;

/// In-memory implementation of BetRepository
///
/// Keeps bets in placement order. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryBetRepository {
    bets: RwLock<Vec<Bet>>,
}

impl InMemoryBetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with bets
    pub fn with_bets(bets: Vec<Bet>) -> Self {
        Self {
            bets: RwLock::new(bets),
        }
    }
}

#[async_trait]
impl BetRepository for InMemoryBetRepository {
    async fn save(&self, bet: &Bet) -> Result<(), String> {
        let mut bets = self
            .bets
            .write()
            .map_err(|e| format!("Failed to acquire write lock: {}", e))?;

        match bets.iter_mut().find(|b| b.id() == bet.id()) {
            Some(existing) => *existing = bet.clone(),
            None => bets.push(bet.clone()),
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bet>, String> {
        let bets = self
            .bets
            .read()
            .map_err(|e| format!("Failed to acquire read lock: {}", e))?;

        Ok(bets.iter().find(|b| b.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Bet>, String> {
        let bets = self
            .bets
            .read()
            .map_err(|e| format!("Failed to acquire read lock: {}", e))?;

        Ok(bets.clone())
    }
}
