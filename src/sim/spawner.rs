//! Bear spawning, movement and cleanup
//!
//! The spawner owns the live bear set and the single spawn timer.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::{bear_speed, spawn_delay_ms};
use super::timer::SpawnTimer;
use crate::consts::GAME_WIDTH;
use crate::lane_y;
use crate::tuning::Tuning;

/// A bear crossing one lane left to right
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bear {
    pub id: u32,
    pub pos: Vec2,
    pub lane: u32,
    /// Horizontal speed (px/s)
    pub speed: f32,
}

/// Live bears plus the timer that creates them
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: SpawnTimer,
    /// Active bears (sorted by id)
    pub bears: Vec<Bear>,
}

impl Spawner {
    /// Start spawning at the cadence for `level`
    pub fn new(tuning: &Tuning, level: u32) -> Self {
        Self {
            timer: SpawnTimer::started(spawn_delay_ms(tuning, level)),
            bears: Vec::new(),
        }
    }

    /// Replace the running timer with one at the cadence for `level`
    pub fn restart(&mut self, tuning: &Tuning, level: u32) {
        self.timer.restart(spawn_delay_ms(tuning, level));
    }

    pub fn timer(&self) -> &SpawnTimer {
        &self.timer
    }

    /// Number of spawns due after `dt_ms`
    pub fn advance_timer(&mut self, dt_ms: f32) -> u32 {
        self.timer.advance(dt_ms)
    }

    /// Create one bear just beyond the near edge in a random lane
    pub fn spawn<R: Rng>(&mut self, id: u32, rng: &mut R, tuning: &Tuning, level: u32) -> &Bear {
        let lane = rng.random_range(tuning.lane_min..=tuning.lane_max);
        let offset = if tuning.spawn_offset_max > 0.0 {
            rng.random_range(0.0..=tuning.spawn_offset_max)
        } else {
            0.0
        };
        let bear = Bear {
            id,
            pos: Vec2::new(-tuning.spawn_offset_max - offset, lane_y(lane)),
            lane,
            speed: bear_speed(tuning, level),
        };
        self.bears.push(bear);
        &self.bears[self.bears.len() - 1]
    }

    /// Move every bear by its velocity
    pub fn move_bears(&mut self, dt: f32) {
        for bear in &mut self.bears {
            bear.pos.x += bear.speed * dt;
        }
    }

    /// Drop bears that have fully left the far edge, returning their ids
    pub fn cleanup(&mut self, tuning: &Tuning) -> Vec<u32> {
        let limit = GAME_WIDTH + tuning.despawn_margin;
        let mut removed = Vec::new();
        self.bears.retain(|b| {
            if b.pos.x > limit {
                removed.push(b.id);
                false
            } else {
                true
            }
        });
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_stays_in_lane_range_and_off_screen() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spawner = Spawner::new(&tuning, 1);
        for id in 0..200 {
            let bear = spawner.spawn(id, &mut rng, &tuning, 1).clone();
            assert!((tuning.lane_min..=tuning.lane_max).contains(&bear.lane));
            assert_eq!(bear.pos.y, lane_y(bear.lane));
            assert!(bear.pos.x <= -tuning.spawn_offset_max);
            assert!(bear.pos.x >= -2.0 * tuning.spawn_offset_max);
            assert_eq!(bear.speed, 140.0);
        }
    }

    #[test]
    fn test_speed_follows_level() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(&tuning, 3);
        assert_eq!(spawner.spawn(1, &mut rng, &tuning, 3).speed, 190.0);
    }

    #[test]
    fn test_cleanup_removes_only_exited_bears() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning, 1);
        spawner.bears.push(Bear {
            id: 1,
            pos: Vec2::new(GAME_WIDTH + tuning.despawn_margin + 1.0, lane_y(4)),
            lane: 4,
            speed: 140.0,
        });
        spawner.bears.push(Bear {
            id: 2,
            pos: Vec2::new(GAME_WIDTH, lane_y(5)),
            lane: 5,
            speed: 140.0,
        });

        assert_eq!(spawner.cleanup(&tuning), vec![1]);
        assert_eq!(spawner.bears.len(), 1);
        assert_eq!(spawner.bears[0].id, 2);

        // Gone for good
        assert!(spawner.cleanup(&tuning).is_empty());
        assert!(spawner.bears.iter().all(|b| b.id != 1));
    }

    #[test]
    fn test_restart_uses_new_cadence() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning, 1);
        assert_eq!(spawner.timer().delay_ms(), 1600);
        spawner.restart(&tuning, 2);
        assert_eq!(spawner.timer().delay_ms(), 1530);
        assert_eq!(spawner.advance_timer(1529.0), 0);
        assert_eq!(spawner.advance_timer(1.0), 1);
    }
}
