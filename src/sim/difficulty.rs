//! Level -> difficulty curve
//!
//! Spawn cadence tightens linearly until it hits the floor; bear speed grows
//! linearly without bound.

use crate::tuning::Tuning;

/// Milliseconds between bear spawns at `level` (1-based)
pub fn spawn_delay_ms(tuning: &Tuning, level: u32) -> u32 {
    let faster = level.saturating_sub(1).saturating_mul(tuning.spawn_step_ms);
    tuning
        .spawn_base_ms
        .saturating_sub(faster)
        .max(tuning.spawn_floor_ms)
}

/// Bear speed in pixels/second at `level` (1-based)
pub fn bear_speed(tuning: &Tuning, level: u32) -> f32 {
    tuning.bear_base_speed + level.saturating_sub(1) as f32 * tuning.bear_speed_step
}
