use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the bet service
#[derive(Debug, Error)]
pub enum BettingError {
    #[error("Bet not found: {0}")]
    BetNotFound(Uuid),

    #[error("Match not found: {0}")]
    MatchNotFound(Uuid),

    #[error("Match has not been played yet: {0}")]
    MatchNotPlayed(Uuid),

    #[error("Championship service unavailable: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type BettingResult<T> = Result<T, BettingError>;
