//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so a build can be retuned
//! without touching simulation code. A `Tuning` must pass [`Tuning::validate`]
//! before the simulation will accept it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::lane_y;

/// How many coins a level asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinQuota {
    /// Same quota on every level
    Fixed(u32),
    /// `min(cap, base + level - 1)`
    Growing { base: u32, cap: u32 },
}

impl CoinQuota {
    /// Coins needed to clear `level` (1-based)
    pub fn coins_needed(&self, level: u32) -> u32 {
        match *self {
            CoinQuota::Fixed(n) => n,
            CoinQuota::Growing { base, cap } => {
                base.saturating_add(level.saturating_sub(1)).min(cap)
            }
        }
    }
}

impl Default for CoinQuota {
    fn default() -> Self {
        CoinQuota::Growing { base: 3, cap: 6 }
    }
}

/// Largest accepted points-per-coin
pub const MAX_COIN_VALUE: u64 = 1_000_000;

/// Rejected balance configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("spawn floor must be positive")]
    ZeroSpawnFloor,
    #[error("spawn base delay {base_ms}ms is below the floor {floor_ms}ms")]
    SpawnBaseBelowFloor { base_ms: u32, floor_ms: u32 },
    #[error("bear base speed must be positive and finite, got {0}")]
    BadBearSpeed(f32),
    #[error("bear speed step must be positive and finite, got {0}")]
    BadBearSpeedStep(f32),
    #[error("coin value must be positive")]
    ZeroCoinValue,
    #[error("coin value {0} is above the limit {MAX_COIN_VALUE}")]
    CoinValueTooLarge(u64),
    #[error("coin quota must ask for at least one coin")]
    ZeroCoinQuota,
    #[error("coin quota cap {cap} is below its base {base}")]
    QuotaCapBelowBase { base: u32, cap: u32 },
    #[error("lane range {min}..={max} is empty")]
    EmptyLaneRange { min: u32, max: u32 },
    #[error("lane {0} crosses the coin row")]
    LaneOverlapsGoal(u32),
    #[error("lane {0} crosses the home row")]
    LaneOverlapsHome(u32),
    #[error("flicker alpha {0} must be within 0..=1")]
    BadFlickerAlpha(f32),
    #[error("{field} must be positive and finite, got {value}")]
    BadDuration { field: &'static str, value: f32 },
    #[error("invalid tuning json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Json(e.to_string())
    }
}

/// Game balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawn cadence ===
    /// Spawn delay at level 1 (ms)
    pub spawn_base_ms: u32,
    /// Spawn delay never drops below this (ms)
    pub spawn_floor_ms: u32,
    /// Delay removed per level (ms)
    pub spawn_step_ms: u32,

    // === Bear speed ===
    /// Bear speed at level 1 (px/s)
    pub bear_base_speed: f32,
    /// Speed added per level (px/s)
    pub bear_speed_step: f32,

    // === Progression ===
    /// Points per coin
    pub coin_value: u64,
    pub coin_quota: CoinQuota,

    // === Hit / respawn ===
    /// Stun window after a bear hit (ms). 0 = reset immediately.
    pub stun_ms: f32,
    /// Time for the flicker to go from opaque to dim (ms)
    pub flicker_half_period_ms: f32,
    /// Dimmest alpha reached by the flicker
    pub flicker_min_alpha: f32,

    // === Level-up banner ===
    pub banner_fade_ms: f32,

    // === Spawner geometry ===
    /// Lowest lane index bears may use
    pub lane_min: u32,
    /// Highest lane index bears may use
    pub lane_max: u32,
    /// Bears start up to this far beyond the near edge (px)
    pub spawn_offset_max: f32,
    /// Bears are removed this far past the far edge (px)
    pub despawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_base_ms: 1600,
            spawn_floor_ms: 700,
            spawn_step_ms: 70,

            bear_base_speed: 140.0,
            bear_speed_step: 25.0,

            coin_value: 10,
            coin_quota: CoinQuota::default(),

            stun_ms: 450.0,
            flicker_half_period_ms: 100.0,
            flicker_min_alpha: 0.25,

            banner_fade_ms: 1100.0,

            lane_min: 3,
            lane_max: 8,
            spawn_offset_max: 140.0,
            despawn_margin: 140.0,
        }
    }
}

impl Tuning {
    /// Parse a JSON override (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the configuration can't produce degenerate gameplay
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.spawn_floor_ms == 0 {
            return Err(TuningError::ZeroSpawnFloor);
        }
        if self.spawn_base_ms < self.spawn_floor_ms {
            return Err(TuningError::SpawnBaseBelowFloor {
                base_ms: self.spawn_base_ms,
                floor_ms: self.spawn_floor_ms,
            });
        }
        if !(self.bear_base_speed.is_finite() && self.bear_base_speed > 0.0) {
            return Err(TuningError::BadBearSpeed(self.bear_base_speed));
        }
        // Strictly increasing speed per level
        if !(self.bear_speed_step.is_finite() && self.bear_speed_step > 0.0) {
            return Err(TuningError::BadBearSpeedStep(self.bear_speed_step));
        }

        if self.coin_value == 0 {
            return Err(TuningError::ZeroCoinValue);
        }
        if self.coin_value > MAX_COIN_VALUE {
            return Err(TuningError::CoinValueTooLarge(self.coin_value));
        }

        match self.coin_quota {
            CoinQuota::Fixed(0) | CoinQuota::Growing { base: 0, .. } => {
                return Err(TuningError::ZeroCoinQuota);
            }
            CoinQuota::Growing { base, cap } if cap < base => {
                return Err(TuningError::QuotaCapBelowBase { base, cap });
            }
            _ => {}
        }

        if self.lane_min > self.lane_max {
            return Err(TuningError::EmptyLaneRange {
                min: self.lane_min,
                max: self.lane_max,
            });
        }
        // Bears must never be able to touch the coin or a player standing at home
        let reach = (BEAR_SIZE * BEAR_HITBOX_SCALE + PLAYER_SIZE * PLAYER_HITBOX_SCALE) / 2.0;
        if lane_y(self.lane_min) - reach < GOAL_Y {
            return Err(TuningError::LaneOverlapsGoal(self.lane_min));
        }
        if lane_y(self.lane_max) + reach > PLAYER_START_Y {
            return Err(TuningError::LaneOverlapsHome(self.lane_max));
        }

        if !(0.0..=1.0).contains(&self.flicker_min_alpha) {
            return Err(TuningError::BadFlickerAlpha(self.flicker_min_alpha));
        }
        check_duration("stun_ms", self.stun_ms, true)?;
        check_duration("flicker_half_period_ms", self.flicker_half_period_ms, false)?;
        check_duration("banner_fade_ms", self.banner_fade_ms, false)?;
        check_duration("spawn_offset_max", self.spawn_offset_max, true)?;
        check_duration("despawn_margin", self.despawn_margin, true)?;

        Ok(())
    }
}

fn check_duration(field: &'static str, value: f32, allow_zero: bool) -> Result<(), TuningError> {
    let ok = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if ok {
        Ok(())
    } else {
        Err(TuningError::BadDuration { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_growing_quota_caps() {
        let quota = CoinQuota::Growing { base: 3, cap: 6 };
        assert_eq!(quota.coins_needed(1), 3);
        assert_eq!(quota.coins_needed(2), 4);
        assert_eq!(quota.coins_needed(4), 6);
        assert_eq!(quota.coins_needed(50), 6);
        assert_eq!(CoinQuota::Fixed(1).coins_needed(9), 1);
    }

    #[test]
    fn test_rejects_zero_floor() {
        let tuning = Tuning {
            spawn_floor_ms: 0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::ZeroSpawnFloor));
    }

    #[test]
    fn test_rejects_base_below_floor() {
        let tuning = Tuning {
            spawn_base_ms: 500,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SpawnBaseBelowFloor { base_ms: 500, floor_ms: 700 })
        ));
    }

    #[test]
    fn test_rejects_bad_quota() {
        let zero = Tuning {
            coin_quota: CoinQuota::Fixed(0),
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(TuningError::ZeroCoinQuota));

        let inverted = Tuning {
            coin_quota: CoinQuota::Growing { base: 5, cap: 2 },
            ..Default::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(TuningError::QuotaCapBelowBase { base: 5, cap: 2 })
        );
    }

    #[test]
    fn test_rejects_zero_or_huge_coin_value() {
        assert_eq!(
            Tuning::from_json(r#"{"coin_value":0}"#),
            Err(TuningError::ZeroCoinValue)
        );
        assert_eq!(
            Tuning::from_json(r#"{"coin_value":18446744073709551615}"#),
            Err(TuningError::CoinValueTooLarge(u64::MAX))
        );
        assert!(Tuning::from_json(r#"{"coin_value":1000000}"#).is_ok());
    }

    #[test]
    fn test_rejects_lanes_touching_home_or_goal() {
        let home = Tuning {
            lane_max: 9,
            ..Default::default()
        };
        assert_eq!(home.validate(), Err(TuningError::LaneOverlapsHome(9)));

        let goal = Tuning {
            lane_min: 1,
            ..Default::default()
        };
        assert_eq!(goal.validate(), Err(TuningError::LaneOverlapsGoal(1)));

        let empty = Tuning {
            lane_min: 7,
            lane_max: 4,
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(TuningError::EmptyLaneRange { .. })));
    }

    #[test]
    fn test_stun_zero_is_allowed() {
        let tuning = Tuning {
            stun_ms: 0.0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Ok(()));

        let negative = Tuning {
            stun_ms: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(TuningError::BadDuration { field: "stun_ms", .. })
        ));
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{"coin_quota":{"Fixed":1},"stun_ms":0.0}"#).unwrap();
        assert_eq!(tuning.coin_quota, CoinQuota::Fixed(1));
        assert_eq!(tuning.stun_ms, 0.0);
        assert_eq!(tuning.spawn_base_ms, 1600);
    }

    #[test]
    fn test_from_json_rejects_garbage_and_invalid() {
        assert!(matches!(Tuning::from_json("{not json"), Err(TuningError::Json(_))));
        assert_eq!(
            Tuning::from_json(r#"{"spawn_floor_ms":0}"#),
            Err(TuningError::ZeroSpawnFloor)
        );
    }
}
