//! Bet placement and settlement.
//!
//! Settlement happens lazily: the first read of a pending bet after its
//! match is played fetches the final score, decides Won/Lost and persists
//! it. Settled bets are served from storage without contacting the
//! championship service again.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::bet::{Bet, MatchStatus, Outcome};
use crate::domain::match_client::{MatchClient, MatchLookup, RemoteMatch};
use crate::domain::repositories::BetRepository;
use crate::domain::{BettingError, BettingResult};

/// Service for placing, reading and settling bets
pub struct BetService {
    repository: Arc<dyn BetRepository>,
    matches: Arc<dyn MatchClient>,
}

impl BetService {
    pub fn new(repository: Arc<dyn BetRepository>, matches: Arc<dyn MatchClient>) -> Self {
        Self {
            repository,
            matches,
        }
    }

    /// Place a bet on an existing match
    ///
    /// # Errors
    /// - `MatchNotFound`: the championship service does not know the match;
    ///   nothing is persisted
    /// - `Upstream`: the championship service could not be read
    pub async fn place_bet(&self, match_id: Uuid, predicted: Outcome) -> BettingResult<Bet> {
        let remote = self.fetch_match(match_id).await?;

        let bet = Bet::place(match_id, predicted, remote.status);
        self.repository
            .save(&bet)
            .await
            .map_err(BettingError::Storage)?;

        info!(
            bet_id = %bet.id(),
            %match_id,
            predicted = %predicted,
            match_status = %remote.status,
            "Bet placed"
        );
        Ok(bet)
    }

    /// Get a bet, settling it first if its match has been played
    ///
    /// # Errors
    /// - `BetNotFound`: the bet id is unknown
    /// - `MatchNotFound`: the bet's match no longer exists upstream
    /// - `MatchNotPlayed`: the bet is pending and its match is still scheduled
    /// - `Upstream`: the championship service could not be read, or reported
    ///   a played match without a final score
    pub async fn get_bet(&self, id: Uuid) -> BettingResult<Bet> {
        let mut bet = self
            .repository
            .find_by_id(id)
            .await
            .map_err(BettingError::Storage)?
            .ok_or(BettingError::BetNotFound(id))?;

        if bet.is_settled() {
            debug!(bet_id = %id, status = %bet.status(), "Bet already settled");
            return Ok(bet);
        }

        let remote = self.fetch_match(bet.match_id()).await?;
        if remote.status != MatchStatus::Played {
            return Err(BettingError::MatchNotPlayed(bet.match_id()));
        }

        let (home_score, away_score) = match (remote.home_score, remote.away_score) {
            (Some(home), Some(away)) => (home, away),
            _ => {
                return Err(BettingError::Upstream(format!(
                    "Match {} is played but has no final score",
                    bet.match_id()
                )))
            }
        };

        let status = bet
            .settle(home_score, away_score)
            .map_err(BettingError::Storage)?;
        self.repository
            .save(&bet)
            .await
            .map_err(BettingError::Storage)?;

        info!(bet_id = %id, %status, home_score, away_score, "Bet settled");
        Ok(bet)
    }

    /// List every stored bet as-is
    pub async fn list_bets(&self) -> BettingResult<Vec<Bet>> {
        let bets = self
            .repository
            .find_all()
            .await
            .map_err(BettingError::Storage)?;

        debug!(count = bets.len(), "Listed bets");
        Ok(bets)
    }

    async fn fetch_match(&self, match_id: Uuid) -> BettingResult<RemoteMatch> {
        match self.matches.get_match(match_id).await {
            MatchLookup::Found(remote) => Ok(remote),
            MatchLookup::NotFound => Err(BettingError::MatchNotFound(match_id)),
            MatchLookup::Unavailable(reason) => {
                warn!(%match_id, %reason, "Match lookup failed");
                Err(BettingError::Upstream(reason))
            }
        }
    }
}
