use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a match from the home team's point of view
///
/// Bets predict one of these; settlement derives the actual one from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    /// Derives the outcome of a final score
    ///
    /// # Example
    /// ```
    /// use betting_api::domain::bet::Outcome;
    ///
    /// assert_eq!(Outcome::from_scores(2, 1), Outcome::HomeWin);
    /// assert_eq!(Outcome::from_scores(1, 2), Outcome::AwayWin);
    /// assert_eq!(Outcome::from_scores(1, 1), Outcome::Draw);
    /// ```
    pub fn from_scores(home_score: i32, away_score: i32) -> Self {
        use std::cmp::Ordering;
        match home_score.cmp(&away_score) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::HomeWin => "HOME_WIN",
            Outcome::AwayWin => "AWAY_WIN",
            Outcome::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOME_WIN" => Ok(Outcome::HomeWin),
            "AWAY_WIN" => Ok(Outcome::AwayWin),
            "DRAW" => Ok(Outcome::Draw),
            other => Err(format!("Unknown outcome: {}", other)),
        }
    }
}

/// Lifecycle status of a bet
///
/// # Status Transitions
/// ```text
/// Pending -> Won
///        \-> Lost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetStatus {
    /// Waiting for the match result
    Pending,
    /// Prediction matched the final result
    Won,
    /// Prediction missed the final result
    Lost,
}

impl BetStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, BetStatus::Won | BetStatus::Lost)
    }

    /// Checks if a transition from current status to next status is valid
    pub fn can_transition_to(&self, next: BetStatus) -> bool {
        use BetStatus::*;
        matches!((self, next), (Pending, Won) | (Pending, Lost))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BetStatus::Pending => "PENDING",
            BetStatus::Won => "WON",
            BetStatus::Lost => "LOST",
        }
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BetStatus::Pending),
            "WON" => Ok(BetStatus::Won),
            "LOST" => Ok(BetStatus::Lost),
            other => Err(format!("Unknown bet status: {}", other)),
        }
    }
}

/// Match lifecycle status as reported by the championship service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Played,
}

impl MatchStatus {
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
