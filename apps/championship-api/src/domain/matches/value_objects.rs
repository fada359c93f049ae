use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a match
///
/// # Status Transitions
/// ```text
/// Scheduled -> Played
/// ```
/// A played match never returns to scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Registered, no final score yet
    Scheduled,
    /// Final score recorded
    Played,
}

impl MatchStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// Recording a score again on a played match (a correction) keeps it played.
    ///
    /// # Example
    /// ```
    /// use championship_api::domain::matches::MatchStatus;
    ///
    /// assert!(MatchStatus::Scheduled.can_transition_to(MatchStatus::Played));
    /// assert!(!MatchStatus::Played.can_transition_to(MatchStatus::Scheduled));
    /// ```
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        use MatchStatus::*;
        matches!((self, next), (Scheduled, Played) | (Played, Played))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Played => "PLAYED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCHEDULED" => Ok(MatchStatus::Scheduled),
            "PLAYED" => Ok(MatchStatus::Played),
            other => Err(format!("Unknown match status: {}", other)),
        }
    }
}
