//! Pot and implied odds.
//!
//! Both are ratios of what can be won to what it costs, e.g. a $100 pot
//! facing a $20 bet is 5.0 (5:1). A bet of zero yields 0.0 rather than an
//! error since there is nothing to price.

use serde::{Deserialize, Serialize};

use crate::game::entities::Chips;

/// Pot odds and implied odds for a single decision.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Odds {
    pub pot_odds: f32,
    pub implied_odds: f32,
}

impl Odds {
    pub fn new(pot_size: Chips, current_bet: Chips, expected_future_bets: Chips) -> Self {
        Self {
            pot_odds: pot_odds(pot_size, current_bet),
            implied_odds: implied_odds(pot_size, current_bet, expected_future_bets),
        }
    }
}

/// Ratio of pot size to the bet being faced.
pub fn pot_odds(pot_size: Chips, current_bet: Chips) -> f32 {
    if current_bet == 0 {
        return 0.0;
    }
    pot_size as f32 / current_bet as f32
}

/// Pot odds counting bets expected on later streets.
pub fn implied_odds(pot_size: Chips, current_bet: Chips, expected_future_bets: Chips) -> f32 {
    if current_bet == 0 {
        return 0.0;
    }
    (pot_size as f32 + expected_future_bets as f32) / current_bet as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_odds_calculation() {
        assert_eq!(pot_odds(100, 20), 5.0);
        assert_eq!(pot_odds(100, 50), 2.0);
        assert_eq!(pot_odds(50, 100), 0.5);
    }

    #[test]
    fn test_zero_bet_is_defined() {
        assert_eq!(pot_odds(50, 0), 0.0);
        assert_eq!(implied_odds(50, 0, 200), 0.0);
        assert_eq!(Odds::new(50, 0, 10), Odds::default());
    }

    #[test]
    fn test_implied_odds_include_future_bets() {
        assert_eq!(implied_odds(100, 20, 60), 8.0);
        let odds = Odds::new(100, 20, 60);
        assert!(odds.implied_odds > odds.pot_odds);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let odds = implied_odds(Chips::MAX, 1, Chips::MAX);
        assert!(odds.is_finite());
    }
}
