//! Hit / respawn state machine
//!
//! `Normal -> Stunned` on bear contact. `advance` only reports that the stun
//! window ran out; the dispatcher calls `recover` when it respawns the player.
//! Contacts while stunned are ignored.

use super::timer::Countdown;
use crate::tuning::Tuning;

/// Whether the player can currently be hit and move
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HitState {
    #[default]
    Normal,
    /// Input ignored, flicker playing, respawn pending
    Stunned { timer: Countdown },
}

/// Result of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Already stunned; nothing happened
    Ignored,
    /// Entered the stun window
    Stunned,
    /// Stun disabled; player should be reset now
    ResetNow,
}

impl HitState {
    pub fn is_stunned(&self) -> bool {
        matches!(self, HitState::Stunned { .. })
    }

    /// Handle a bear contact
    pub fn contact(&mut self, tuning: &Tuning) -> ContactOutcome {
        if self.is_stunned() {
            return ContactOutcome::Ignored;
        }
        if tuning.stun_ms <= 0.0 {
            return ContactOutcome::ResetNow;
        }
        *self = HitState::Stunned {
            timer: Countdown::new(tuning.stun_ms),
        };
        ContactOutcome::Stunned
    }

    /// Advance the stun window; true once it has run out. The state stays
    /// `Stunned` until [`HitState::recover`] is called.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        match self {
            HitState::Normal => false,
            HitState::Stunned { timer } => timer.advance(dt_ms),
        }
    }

    /// End the stun window
    pub fn recover(&mut self) {
        *self = HitState::Normal;
    }

    /// Player sprite opacity (1.0 unless flickering)
    pub fn alpha(&self, tuning: &Tuning) -> f32 {
        match self {
            HitState::Normal => 1.0,
            HitState::Stunned { timer } => {
                flicker_alpha(
                    timer.elapsed_ms(),
                    tuning.flicker_half_period_ms,
                    tuning.flicker_min_alpha,
                )
            }
        }
    }
}

/// Triangle wave: 1.0 at t=0, `min_alpha` after one half period, back to 1.0
pub fn flicker_alpha(elapsed_ms: f32, half_period_ms: f32, min_alpha: f32) -> f32 {
    if half_period_ms <= 0.0 {
        return 1.0;
    }
    let phase = (elapsed_ms / half_period_ms) % 2.0;
    let depth = if phase < 1.0 { phase } else { 2.0 - phase };
    1.0 - depth * (1.0 - min_alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_stuns_once() {
        let tuning = Tuning::default();
        let mut hit = HitState::default();
        assert_eq!(hit.contact(&tuning), ContactOutcome::Stunned);
        assert!(hit.is_stunned());

        hit.advance(200.0);
        // Second contact doesn't restart the window
        assert_eq!(hit.contact(&tuning), ContactOutcome::Ignored);
        assert!(!hit.advance(200.0));
        assert!(hit.advance(50.0));
        // Window over, but still stunned until recovered
        assert!(hit.is_stunned());
        hit.recover();
        assert_eq!(hit, HitState::Normal);
    }

    #[test]
    fn test_zero_stun_resets_immediately() {
        let tuning = Tuning {
            stun_ms: 0.0,
            ..Default::default()
        };
        let mut hit = HitState::default();
        assert_eq!(hit.contact(&tuning), ContactOutcome::ResetNow);
        assert_eq!(hit, HitState::Normal);
    }

    #[test]
    fn test_flicker_shape() {
        assert_eq!(flicker_alpha(0.0, 100.0, 0.25), 1.0);
        assert!((flicker_alpha(100.0, 100.0, 0.25) - 0.25).abs() < 1e-5);
        assert!((flicker_alpha(50.0, 100.0, 0.25) - 0.625).abs() < 1e-5);
        assert!((flicker_alpha(200.0, 100.0, 0.25) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_alpha_restored_after_respawn() {
        let tuning = Tuning::default();
        let mut hit = HitState::default();
        hit.contact(&tuning);
        hit.advance(100.0);
        assert!(hit.alpha(&tuning) < 1.0);
        assert!(hit.advance(400.0));
        hit.recover();
        assert_eq!(hit.alpha(&tuning), 1.0);
    }
}
