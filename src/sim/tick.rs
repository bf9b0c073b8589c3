//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{bear_hitbox, clamp_to_world, goal_hitbox, player_hitbox};
use super::dispatch::{Trigger, apply};
use super::state::{GameEvent, GameState, Hop};
use crate::consts::PLAYER_SIZE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key pressed this tick (edge, not held)
    pub hop: Option<Hop>,
}

/// Advance the game state by one fixed timestep (`dt` in seconds)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt_ms = dt * 1000.0;
    state.time_ticks += 1;

    // Movement is locked while stunned
    if let Some(hop) = input.hop {
        if !state.player.hit.is_stunned() {
            let target = state.player.pos + hop.delta();
            state.player.pos = clamp_to_world(target, PLAYER_SIZE);
        }
    }

    state.spawner.move_bears(dt);

    for _ in 0..state.spawner.advance_timer(dt_ms) {
        apply(state, Trigger::SpawnDue);
    }

    if state.player.hit.advance(dt_ms) {
        apply(state, Trigger::StunExpired);
    }

    if let Some(banner) = state.banner.as_mut() {
        if banner.fade.advance(dt_ms) {
            state.banner = None;
        }
    }

    // Overlaps
    let player_box = player_hitbox(state.player.pos);
    if state
        .spawner
        .bears
        .iter()
        .any(|b| player_box.overlaps(&bear_hitbox(b.pos)))
    {
        apply(state, Trigger::BearContact);
    }
    // Re-read position: an immediate reset may have moved the player
    if player_hitbox(state.player.pos).overlaps(&goal_hitbox(state.goal)) {
        apply(state, Trigger::CoinReached);
    }

    for id in state.spawner.cleanup(&state.tuning) {
        log::debug!("Bear {} left the play area", id);
        state.events.push(GameEvent::BearDespawned { id });
    }
}
