//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hit::HitState;
use super::progression::Progress;
use super::spawner::Spawner;
use super::timer::Countdown;
use crate::consts::*;
use crate::player_start;
use crate::tuning::{Tuning, TuningError};

/// One discrete player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hop {
    Up,
    Down,
    Left,
    Right,
}

impl Hop {
    /// Displacement of one hop (half a lane)
    pub fn delta(self) -> Vec2 {
        match self {
            Hop::Up => Vec2::new(0.0, -HOP),
            Hop::Down => Vec2::new(0.0, HOP),
            Hop::Left => Vec2::new(-HOP, 0.0),
            Hop::Right => Vec2::new(HOP, 0.0),
        }
    }
}

/// The frog
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub hit: HitState,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: player_start(),
            hit: HitState::Normal,
        }
    }
}

impl Player {
    /// Back to the home row
    pub fn reset_position(&mut self) {
        self.pos = player_start();
    }
}

/// Fading "LEVEL UP!" notice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelUpBanner {
    pub level: u32,
    pub fade: Countdown,
}

impl LevelUpBanner {
    /// Opacity, fading linearly from 1 to 0
    pub fn alpha(&self) -> f32 {
        1.0 - self.fade.progress()
    }
}

/// Things that happened during a tick, drained by the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected {
        score: u64,
        coins_collected: u32,
        coins_needed: u32,
    },
    LevelUp {
        level: u32,
        coins_needed: u32,
        spawn_delay_ms: u32,
        bear_speed: f32,
    },
    PlayerHit,
    PlayerRespawned,
    BearSpawned {
        id: u32,
        lane: u32,
    },
    BearDespawned {
        id: u32,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Validated balance constants
    pub tuning: Tuning,
    pub progress: Progress,
    pub player: Player,
    pub spawner: Spawner,
    /// Coin position (never moves)
    pub goal: Vec2,
    pub banner: Option<LevelUpBanner>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with default balance
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new game with a custom balance, rejecting invalid ones
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let progress = Progress::new(&tuning);
        let spawner = Spawner::new(&tuning, progress.level);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            progress,
            player: Player::default(),
            spawner,
            goal: Vec2::new(GOAL_X, GOAL_Y),
            banner: None,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current player opacity
    pub fn player_alpha(&self) -> f32 {
        self.player.hit.alpha(&self.tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::CoinQuota;

    #[test]
    fn test_new_game() {
        let state = GameState::new(42);
        assert_eq!(state.progress.level, 1);
        assert_eq!(state.progress.coins_needed, 3);
        assert_eq!(state.player.pos, player_start());
        assert!(state.spawner.bears.is_empty());
        assert_eq!(state.spawner.timer().delay_ms(), 1600);
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_with_tuning_rejects_invalid() {
        let bad = Tuning {
            coin_quota: CoinQuota::Fixed(0),
            ..Default::default()
        };
        assert!(matches!(
            GameState::with_tuning(1, bad),
            Err(TuningError::ZeroCoinQuota)
        ));
    }

    #[test]
    fn test_hop_is_half_a_lane() {
        assert_eq!(Hop::Up.delta(), Vec2::new(0.0, -32.0));
        assert_eq!(Hop::Right.delta(), Vec2::new(32.0, 0.0));
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}
