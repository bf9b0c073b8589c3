//! Score / level / coin quota bookkeeping

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Progression counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub score: u64,
    /// Current level (starts at 1)
    pub level: u32,
    /// Coins required to clear this level
    pub coins_needed: u32,
    /// Coins picked up since the last level-up
    pub coins_collected: u32,
}

/// What a single coin pickup did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinOutcome {
    /// Quota not met yet
    Counted,
    /// Quota met; carries the new level
    LevelUp { level: u32 },
}

impl Progress {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            level: 1,
            coins_needed: tuning.coin_quota.coins_needed(1),
            coins_collected: 0,
        }
    }

    /// Credit one coin, levelling up when the quota is met
    pub fn collect_coin(&mut self, tuning: &Tuning) -> CoinOutcome {
        self.score = self.score.saturating_add(tuning.coin_value);
        self.coins_collected += 1;

        if self.coins_collected >= self.coins_needed {
            self.level_up(tuning);
            CoinOutcome::LevelUp { level: self.level }
        } else {
            CoinOutcome::Counted
        }
    }

    fn level_up(&mut self, tuning: &Tuning) {
        self.level += 1;
        self.coins_collected = 0;
        self.coins_needed = tuning.coin_quota.coins_needed(self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::CoinQuota;

    #[test]
    fn test_starting_progress() {
        let p = Progress::new(&Tuning::default());
        assert_eq!(
            p,
            Progress {
                score: 0,
                level: 1,
                coins_needed: 3,
                coins_collected: 0
            }
        );
    }

    #[test]
    fn test_coin_below_quota_only_counts() {
        let tuning = Tuning::default();
        let mut p = Progress::new(&tuning);
        assert_eq!(p.collect_coin(&tuning), CoinOutcome::Counted);
        assert_eq!(p.score, 10);
        assert_eq!(p.coins_collected, 1);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_quota_coin_levels_up_once() {
        let tuning = Tuning::default();
        let mut p = Progress::new(&tuning);
        p.collect_coin(&tuning);
        p.collect_coin(&tuning);
        assert_eq!(p.collect_coin(&tuning), CoinOutcome::LevelUp { level: 2 });
        assert_eq!(p.score, 30);
        assert_eq!(p.level, 2);
        assert_eq!(p.coins_collected, 0);
        assert_eq!(p.coins_needed, 4);

        // Next coin is a plain count again
        assert_eq!(p.collect_coin(&tuning), CoinOutcome::Counted);
        assert_eq!(p.level, 2);
    }

    #[test]
    fn test_quota_stops_growing_at_cap() {
        let tuning = Tuning::default();
        let mut p = Progress::new(&tuning);
        while p.level < 6 {
            p.collect_coin(&tuning);
        }
        assert_eq!(p.coins_needed, 6);
    }

    #[test]
    fn test_score_saturates_instead_of_overflowing() {
        let tuning = Tuning {
            coin_value: u64::MAX,
            ..Default::default()
        };
        let mut p = Progress::new(&tuning);
        p.collect_coin(&tuning);
        p.collect_coin(&tuning);
        assert_eq!(p.score, u64::MAX);
        assert_eq!(p.coins_collected, 2);
    }

    #[test]
    fn test_fixed_quota_levels_every_coin() {
        let tuning = Tuning {
            coin_quota: CoinQuota::Fixed(1),
            ..Default::default()
        };
        let mut p = Progress::new(&tuning);
        assert_eq!(p.coins_needed, 1);
        assert_eq!(p.collect_coin(&tuning), CoinOutcome::LevelUp { level: 2 });
        assert_eq!(p.collect_coin(&tuning), CoinOutcome::LevelUp { level: 3 });
        assert_eq!(p.coins_needed, 1);
        assert_eq!(p.score, 20);
    }
}
