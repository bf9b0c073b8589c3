//! Trigger -> state transition dispatcher
//!
//! Every progression, hit and spawner-membership change goes through
//! [`apply`]. Overlap detection and timers only decide *that* something
//! happened; this module decides what it does.

use super::difficulty::{bear_speed, spawn_delay_ms};
use super::hit::ContactOutcome;
use super::progression::CoinOutcome;
use super::state::{GameEvent, GameState, LevelUpBanner};
use super::timer::Countdown;

/// Something the world reported this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Player overlaps the coin
    CoinReached,
    /// Player overlaps a bear
    BearContact,
    /// Spawn timer fired
    SpawnDue,
    /// Stun window ran out
    StunExpired,
}

/// Apply one trigger to the state
pub fn apply(state: &mut GameState, trigger: Trigger) {
    match trigger {
        Trigger::CoinReached => collect_coin(state),
        Trigger::BearContact => bear_contact(state),
        Trigger::SpawnDue => spawn_bear(state),
        Trigger::StunExpired => {
            state.player.hit.recover();
            state.player.reset_position();
            state.events.push(GameEvent::PlayerRespawned);
        }
    }
}

fn collect_coin(state: &mut GameState) {
    let outcome = state.progress.collect_coin(&state.tuning);
    state.player.reset_position();
    state.events.push(GameEvent::CoinCollected {
        score: state.progress.score,
        coins_collected: state.progress.coins_collected,
        coins_needed: state.progress.coins_needed,
    });

    if let CoinOutcome::LevelUp { level } = outcome {
        // Cadence only ever changes here
        state.spawner.restart(&state.tuning, level);
        state.banner = Some(LevelUpBanner {
            level,
            fade: Countdown::new(state.tuning.banner_fade_ms),
        });

        let delay = spawn_delay_ms(&state.tuning, level);
        let speed = bear_speed(&state.tuning, level);
        log::info!(
            "Level {} (need {} coins, spawn every {}ms, bears at {}px/s)",
            level,
            state.progress.coins_needed,
            delay,
            speed
        );
        state.events.push(GameEvent::LevelUp {
            level,
            coins_needed: state.progress.coins_needed,
            spawn_delay_ms: delay,
            bear_speed: speed,
        });
    }
}

fn bear_contact(state: &mut GameState) {
    match state.player.hit.contact(&state.tuning) {
        ContactOutcome::Ignored => {}
        ContactOutcome::Stunned => {
            state.events.push(GameEvent::PlayerHit);
        }
        ContactOutcome::ResetNow => {
            state.events.push(GameEvent::PlayerHit);
            state.player.reset_position();
            state.events.push(GameEvent::PlayerRespawned);
        }
    }
}

fn spawn_bear(state: &mut GameState) {
    let id = state.next_entity_id();
    let level = state.progress.level;
    let bear = state.spawner.spawn(id, &mut state.rng, &state.tuning, level);
    log::debug!("Bear {} spawned in lane {}", bear.id, bear.lane);
    let event = GameEvent::BearSpawned {
        id: bear.id,
        lane: bear.lane,
    };
    state.events.push(event);
}
