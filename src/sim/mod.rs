//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod dispatch;
pub mod hit;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::Hitbox;
pub use difficulty::{bear_speed, spawn_delay_ms};
pub use dispatch::{Trigger, apply};
pub use hit::{ContactOutcome, HitState};
pub use progression::{CoinOutcome, Progress};
pub use spawner::{Bear, Spawner};
pub use state::{GameEvent, GameState, Hop, LevelUpBanner, Player};
pub use tick::{TickInput, tick};
pub use timer::{Countdown, SpawnTimer};
