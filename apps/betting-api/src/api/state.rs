use std::sync::Arc;

use crate::domain::match_client::MatchClient;
use crate::domain::repositories::BetRepository;
use crate::services::BetService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub bets: Arc<BetService>,
}

impl AppState {
    pub fn new(bet_repository: Arc<dyn BetRepository>, match_client: Arc<dyn MatchClient>) -> Self {
        Self {
            bets: Arc::new(BetService::new(bet_repository, match_client)),
        }
    }
}
