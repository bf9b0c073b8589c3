//! WENP Hop - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (progression, hit/respawn, spawner, timers)
//! - `tuning`: Data-driven game balance
//! - `hud`: Pure projection of game state to HUD text
//! - `renderer`: Canvas 2D drawing (browser only)
//! - `reward`: Deferred level-up reward call
//! - `settings`: Player preferences

pub mod hud;
pub mod renderer;
pub mod reward;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use hud::HudText;
pub use settings::Settings;
pub use tuning::{CoinQuota, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area dimensions (pixels)
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 640.0;
    pub const LANE_HEIGHT: f32 = 64.0;
    /// Number of lanes drawn across the play area
    pub const LANE_COUNT: u32 = (GAME_HEIGHT / LANE_HEIGHT) as u32;
    /// One hop is half a lane
    pub const HOP: f32 = LANE_HEIGHT / 2.0;

    /// Player spawn point (home row)
    pub const PLAYER_START_X: f32 = GAME_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = GAME_HEIGHT - 80.0;

    /// Coin position (fixed)
    pub const GOAL_X: f32 = GAME_WIDTH / 2.0;
    pub const GOAL_Y: f32 = 95.0;

    /// Displayed sprite sizes
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const BEAR_SIZE: f32 = 48.0;
    pub const COIN_SIZE: f32 = 36.0;

    /// Hitbox scale relative to displayed size
    pub const PLAYER_HITBOX_SCALE: f32 = 0.75;
    pub const BEAR_HITBOX_SCALE: f32 = 0.75;
    pub const COIN_HITBOX_SCALE: f32 = 1.05;
}

/// Player spawn point as a vector
#[inline]
pub fn player_start() -> Vec2 {
    Vec2::new(consts::PLAYER_START_X, consts::PLAYER_START_Y)
}

/// Lane index to the y coordinate bears travel along
#[inline]
pub fn lane_y(lane: u32) -> f32 {
    lane as f32 * consts::LANE_HEIGHT
}
