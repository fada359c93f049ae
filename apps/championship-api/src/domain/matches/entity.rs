use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::MatchStatus;

/// A match between a home team and an away team
///
/// # Invariants
/// - Scores are both absent while scheduled
/// - Scores are both present once played
/// - Status never moves back from Played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    home_score: Option<i32>,
    away_score: Option<i32>,
    status: MatchStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Match {
    /// Creates a scheduled match with no scores
    pub fn new(home_team_id: Uuid, away_team_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            status: MatchStatus::Scheduled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records the final score and marks the match as played
    ///
    /// Calling this again on a played match replaces the score.
    pub fn record_score(&mut self, home_score: i32, away_score: i32) -> Result<(), String> {
        let next_status = MatchStatus::Played;
        if !self.status.can_transition_to(next_status) {
            return Err(format!("Cannot record score for match in {} status", self.status));
        }

        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = next_status;
        self.updated_at = Utc::now();

        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn home_team_id(&self) -> Uuid {
        self.home_team_id
    }

    pub fn away_team_id(&self) -> Uuid {
        self.away_team_id
    }

    pub fn home_score(&self) -> Option<i32> {
        self.home_score
    }

    pub fn away_score(&self) -> Option<i32> {
        self.away_score
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Match from persistence layer data
    ///
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        home_team_id: Uuid,
        away_team_id: Uuid,
        home_score: Option<i32>,
        away_score: Option<i32>,
        status: MatchStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
            status,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_is_scheduled_without_scores() {
        let home = Uuid::new_v4();
        let away = Uuid::new_v4();

        let game = Match::new(home, away);

        assert_eq!(game.home_team_id(), home);
        assert_eq!(game.away_team_id(), away);
        assert_eq!(game.status(), MatchStatus::Scheduled);
        assert!(game.home_score().is_none());
        assert!(game.away_score().is_none());
    }

    #[test]
    fn record_score_marks_played() {
        let mut game = Match::new(Uuid::new_v4(), Uuid::new_v4());

        game.record_score(2, 3).unwrap();

        assert_eq!(game.home_score(), Some(2));
        assert_eq!(game.away_score(), Some(3));
        assert_eq!(game.status(), MatchStatus::Played);
    }

    #[test]
    fn record_score_twice_replaces_the_score() {
        let mut game = Match::new(Uuid::new_v4(), Uuid::new_v4());

        game.record_score(1, 0).unwrap();
        game.record_score(1, 1).unwrap();

        assert_eq!(game.home_score(), Some(1));
        assert_eq!(game.away_score(), Some(1));
        assert_eq!(game.status(), MatchStatus::Played);
    }
}
