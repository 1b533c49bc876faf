//! Match rules configuration.

use serde::{Deserialize, Serialize};

/// Number of cards held in hand. Fixed by the movement encoding
/// (`hand` indexes `0..HAND_SIZE`).
pub const HAND_SIZE: usize = 4;

/// Side length of a card's footprint.
pub const CARD_SIZE: u32 = 8;

/// Tunable match rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rounds per match. The round counter starts here and counts down to 0.
    pub rounds: u32,

    /// Exact deck size required by deck validation.
    pub deck_size: usize,

    /// Hand redraws each player may take before the first round.
    pub redraw_quota: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rounds: 12,
            deck_size: 15,
            redraw_quota: 1,
        }
    }
}

impl RulesConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the required deck size.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: usize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Set the redraw quota.
    #[must_use]
    pub fn with_redraw_quota(mut self, quota: u32) -> Self {
        self.redraw_quota = quota;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.rounds, 12);
        assert_eq!(config.deck_size, 15);
        assert_eq!(config.redraw_quota, 1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_rounds(6)
            .with_deck_size(10)
            .with_redraw_quota(0);

        assert_eq!(config.rounds, 6);
        assert_eq!(config.deck_size, 10);
        assert_eq!(config.redraw_quota, 0);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default().with_rounds(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
