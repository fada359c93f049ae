use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::bet::MatchStatus;

#[cfg(test)]
use mockall::automock;

/// Match state as read from the championship service
///
/// Only the fields needed to place and settle bets; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteMatch {
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

/// Result of looking a match up in the championship service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchLookup {
    Found(RemoteMatch),
    NotFound,
    /// Transport failure, unexpected status or undecodable payload
    Unavailable(String),
}

/// Client for the championship service's "get match by id" endpoint
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MatchClient: Send + Sync {
    async fn get_match(&self, match_id: Uuid) -> MatchLookup;
}
