use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::settlement::settle;
use super::value_objects::{BetStatus, MatchStatus, Outcome};

/// A bet on the outcome of one match
///
/// `match_status` is the match status the championship service reported
/// when the bet was placed (refreshed to `Played` on settlement), while
/// `status` is the bet's own lifecycle.
///
/// # Invariants
/// - New bets are always Pending
/// - Status only moves Pending -> Won | Lost, exactly once
/// - A settled bet always has `settled_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    id: Uuid,
    match_id: Uuid,
    predicted: Outcome,
    match_status: MatchStatus,
    status: BetStatus,
    placed_at: DateTime<Utc>,
    settled_at: Option<DateTime<Utc>>,
}

impl Bet {
    /// Creates a pending bet on `match_id`
    ///
    /// # Arguments
    /// * `match_id` - Match in the championship service
    /// * `predicted` - Predicted result
    /// * `match_status` - Match status observed when placing the bet
    pub fn place(match_id: Uuid, predicted: Outcome, match_status: MatchStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            predicted,
            match_status,
            status: BetStatus::Pending,
            placed_at: Utc::now(),
            settled_at: None,
        }
    }

    /// Settles the bet against a final score
    ///
    /// # Returns
    /// * `Ok(BetStatus)` - Won or Lost
    /// * `Err(String)` - If the bet is already settled
    pub fn settle(&mut self, home_score: i32, away_score: i32) -> Result<BetStatus, String> {
        let next_status = settle(self.predicted, home_score, away_score);
        if !self.status.can_transition_to(next_status) {
            return Err(format!("Bet {} is already settled as {}", self.id, self.status));
        }

        self.status = next_status;
        self.match_status = MatchStatus::Played;
        self.settled_at = Some(Utc::now());

        Ok(next_status)
    }

    pub fn is_settled(&self) -> bool {
        self.status.is_settled()
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn match_id(&self) -> Uuid {
        self.match_id
    }

    pub fn predicted(&self) -> Outcome {
        self.predicted
    }

    pub fn match_status(&self) -> MatchStatus {
        self.match_status
    }

    pub fn status(&self) -> BetStatus {
        self.status
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.settled_at
    }

    /// Reconstructs a Bet from persistence layer data
    ///
    /// Only to be used by repository implementations and test fixtures.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        match_id: Uuid,
        predicted: Outcome,
        match_status: MatchStatus,
        status: BetStatus,
        placed_at: DateTime<Utc>,
        settled_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            match_id,
            predicted,
            match_status,
            status,
            placed_at,
            settled_at,
        }
    }
}
