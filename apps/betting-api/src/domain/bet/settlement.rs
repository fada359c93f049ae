use super::value_objects::{BetStatus, Outcome};

/// Decides whether a prediction won against a final score
///
/// Total over every score pair: there is no void or push result.
pub fn settle(predicted: Outcome, home_score: i32, away_score: i32) -> BetStatus {
    if predicted == Outcome::from_scores(home_score, away_score) {
        BetStatus::Won
    } else {
        BetStatus::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_prediction_on_level_score_wins() {
        assert_eq!(settle(Outcome::Draw, 1, 1), BetStatus::Won);
    }

    #[test]
    fn home_win_prediction_wins() {
        assert_eq!(settle(Outcome::HomeWin, 2, 1), BetStatus::Won);
    }

    #[test]
    fn away_win_prediction_wins() {
        assert_eq!(settle(Outcome::AwayWin, 1, 2), BetStatus::Won);
    }

    #[test]
    fn draw_prediction_on_home_win_loses() {
        assert_eq!(settle(Outcome::Draw, 2, 1), BetStatus::Lost);
    }

    #[test]
    fn exactly_one_prediction_wins_for_any_score() {
        let predictions = [Outcome::HomeWin, Outcome::AwayWin, Outcome::Draw];

        for home in 0..6 {
            for away in 0..6 {
                let winners: Vec<Outcome> = predictions
                    .iter()
                    .copied()
                    .filter(|p| settle(*p, home, away) == BetStatus::Won)
                    .collect();

                assert_eq!(winners, vec![Outcome::from_scores(home, away)]);
            }
        }
    }
}
