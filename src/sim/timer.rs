//! Game-time timers
//!
//! Timers only advance when the simulation ticks, so pausing the loop pauses
//! them too.

/// A single delayed event that fires once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration_ms: f32,
    elapsed_ms: f32,
}

impl Countdown {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms`; true once the countdown has run out
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Fraction complete in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            self.elapsed_ms / self.duration_ms
        }
    }
}

/// A repeating timer; the first fire happens one full delay after start
#[derive(Debug, Clone, Copy, PartialEq)]
struct Repeating {
    delay_ms: f32,
    elapsed_ms: f32,
}

impl Repeating {
    fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: delay_ms.max(1) as f32,
            elapsed_ms: 0.0,
        }
    }
}

/// Owner of the one repeating spawn timer.
///
/// There is exactly one slot and no way to stop it, so starting a new
/// cadence always replaces the previous one.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    active: Repeating,
}

impl SpawnTimer {
    /// Create a timer already running at `delay_ms`
    pub fn started(delay_ms: u32) -> Self {
        Self {
            active: Repeating::new(delay_ms),
        }
    }

    /// Drop the running timer and start fresh with `delay_ms`
    pub fn restart(&mut self, delay_ms: u32) {
        self.active = Repeating::new(delay_ms);
    }

    /// Current delay
    pub fn delay_ms(&self) -> u32 {
        self.active.delay_ms as u32
    }

    /// Advance by `dt_ms`, returning how many times the timer fired
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        let timer = &mut self.active;
        timer.elapsed_ms += dt_ms;
        let mut fires = 0;
        while timer.elapsed_ms >= timer.delay_ms {
            timer.elapsed_ms -= timer.delay_ms;
            fires += 1;
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_fires_once_done() {
        let mut c = Countdown::new(450.0);
        assert!(!c.advance(200.0));
        assert!(!c.advance(200.0));
        assert!(c.advance(200.0));
        assert_eq!(c.progress(), 1.0);
        // Stays done without overshooting
        assert!(c.advance(1000.0));
        assert_eq!(c.elapsed_ms(), 450.0);
    }

    #[test]
    fn test_zero_countdown_is_immediately_done() {
        let c = Countdown::new(0.0);
        assert!(c.is_done());
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn test_spawn_timer_fires_each_delay() {
        let mut t = SpawnTimer::started(1000);
        assert_eq!(t.advance(999.0), 0);
        assert_eq!(t.advance(1.0), 1);
        assert_eq!(t.advance(2500.0), 2);
    }

    #[test]
    fn test_restart_replaces_running_timer() {
        let mut t = SpawnTimer::started(1000);
        assert_eq!(t.advance(900.0), 0);

        t.restart(500);
        assert_eq!(t.delay_ms(), 500);
        // Old progress is discarded with the old timer
        assert_eq!(t.advance(400.0), 0);
        assert_eq!(t.advance(100.0), 1);
    }
}
