use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the team and match services
#[derive(Debug, Error)]
pub enum ChampionshipError {
    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("Match not found: {0}")]
    MatchNotFound(Uuid),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ChampionshipResult<T> = Result<T, ChampionshipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_include_the_id() {
        let id = Uuid::new_v4();

        assert_eq!(
            ChampionshipError::TeamNotFound(id).to_string(),
            format!("Team not found: {}", id)
        );
        assert_eq!(
            ChampionshipError::MatchNotFound(id).to_string(),
            format!("Match not found: {}", id)
        );
    }
}
