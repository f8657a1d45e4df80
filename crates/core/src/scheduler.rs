//! Frame scheduler - decides from wall-clock time whether a tick is due
//!
//! The budget between ticks is `base_frame / (speed * boost)`. Two pacing
//! strategies are available:
//!
//! - [`PacingStrategy::RecomputedBudget`]: compare time since the last committed
//!   tick against a freshly computed budget; the reference resets on every tick.
//! - [`PacingStrategy::ResidualAccumulator`]: keep a countdown that is decremented
//!   by measured deltas and refilled on each tick, carrying over any overshoot.
//!
//! While paused no tick fires and no timer state advances: the paused interval is
//! excluded by shifting the reference timestamps forward on the first unpaused poll.
//! The scheduler never sleeps and never reads the clock itself; callers pass `now`.

use std::time::{Duration, Instant};

/// How the delay budget is tracked between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingStrategy {
    RecomputedBudget,
    ResidualAccumulator,
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    strategy: PacingStrategy,
    base_frame: Duration,
    /// Last committed tick (recomputed) or last poll (residual)
    reference: Instant,
    /// Remaining budget in nanoseconds; negative means overdue
    residual_nanos: i128,
    paused_since: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(strategy: PacingStrategy, base_frame: Duration, now: Instant) -> Self {
        Self {
            strategy,
            base_frame,
            reference: now,
            residual_nanos: base_frame.as_nanos() as i128,
            paused_since: None,
        }
    }

    pub fn strategy(&self) -> PacingStrategy {
        self.strategy
    }

    pub fn base_frame(&self) -> Duration {
        self.base_frame
    }

    /// Delay budget for a speed and boost multiplier
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, Instant};
    /// use brick_game_core::{FrameScheduler, PacingStrategy};
    ///
    /// let s = FrameScheduler::new(
    ///     PacingStrategy::RecomputedBudget,
    ///     Duration::from_millis(1000),
    ///     Instant::now(),
    /// );
    /// assert_eq!(s.delay(2, 1.0), Duration::from_millis(500));
    /// assert_eq!(s.delay(2, 1.5), Duration::from_nanos(333_333_333));
    /// ```
    pub fn delay(&self, speed: u32, boost: f64) -> Duration {
        let divisor = speed.max(1) as f64 * boost.max(1.0);
        Duration::from_nanos((self.base_frame.as_nanos() as f64 / divisor) as u64)
    }

    /// Start a fresh budget at `now` (used on engine reset)
    pub fn rebase(&mut self, now: Instant) {
        self.reference = now;
        self.residual_nanos = self.base_frame.as_nanos() as i128;
        self.paused_since = None;
    }

    /// Returns true when a tick should fire at `now`
    pub fn poll(&mut self, now: Instant, speed: u32, boost: f64, paused: bool) -> bool {
        if paused {
            if self.paused_since.is_none() {
                self.paused_since = Some(now);
            }
            return false;
        }

        if let Some(since) = self.paused_since.take() {
            self.reference += now.saturating_duration_since(since);
        }

        let delay = self.delay(speed, boost);
        match self.strategy {
            PacingStrategy::RecomputedBudget => {
                if now.saturating_duration_since(self.reference) >= delay {
                    self.reference = now;
                    true
                } else {
                    false
                }
            }
            PacingStrategy::ResidualAccumulator => {
                let delta = now.saturating_duration_since(self.reference);
                self.reference = now;
                self.residual_nanos -= delta.as_nanos() as i128;
                if self.residual_nanos <= 0 {
                    self.residual_nanos += delay.as_nanos() as i128;
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_delay_scales_with_speed_and_boost() {
        let s = FrameScheduler::new(PacingStrategy::RecomputedBudget, SECOND, Instant::now());
        assert_eq!(s.delay(1, 1.0), SECOND);
        assert_eq!(s.delay(10, 1.0), ms(100));
        assert_eq!(s.delay(1, 1.5), Duration::from_nanos(666_666_666));
        // Speed 0 is treated as 1.
        assert_eq!(s.delay(0, 1.0), SECOND);
    }

    #[test]
    fn test_recomputed_fires_after_budget_and_resets() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(PacingStrategy::RecomputedBudget, SECOND, t0);

        assert!(!s.poll(t0 + ms(999), 1, 1.0, false));
        assert!(s.poll(t0 + ms(1000), 1, 1.0, false));
        // Reference moved to the tick time.
        assert!(!s.poll(t0 + ms(1500), 1, 1.0, false));
        assert!(s.poll(t0 + ms(2000), 1, 1.0, false));
    }

    #[test]
    fn test_recomputed_uses_current_speed() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(PacingStrategy::RecomputedBudget, SECOND, t0);
        assert!(s.poll(t0 + ms(500), 2, 1.0, false));
        assert!(!s.poll(t0 + ms(700), 2, 1.0, false));
        assert!(s.poll(t0 + ms(700), 5, 1.0, false));
    }

    #[test]
    fn test_residual_carries_overshoot() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(PacingStrategy::ResidualAccumulator, SECOND, t0);

        assert!(!s.poll(t0 + ms(600), 1, 1.0, false));
        // 1200ms elapsed: fires, 200ms overshoot carried into the next budget.
        assert!(s.poll(t0 + ms(1200), 1, 1.0, false));
        assert!(!s.poll(t0 + ms(1999), 1, 1.0, false));
        assert!(s.poll(t0 + ms(2000), 1, 1.0, false));
    }

    #[test]
    fn test_pause_blocks_ticks_and_excludes_time() {
        for strategy in [
            PacingStrategy::RecomputedBudget,
            PacingStrategy::ResidualAccumulator,
        ] {
            let t0 = Instant::now();
            let mut s = FrameScheduler::new(strategy, SECOND, t0);

            assert!(!s.poll(t0 + ms(400), 1, 1.0, false));
            assert!(!s.poll(t0 + ms(500), 1, 1.0, true));
            assert!(!s.poll(t0 + ms(5000), 1, 1.0, true));
            // 500..5400 is excluded: 500ms of budget used so far.
            assert!(!s.poll(t0 + ms(5400), 1, 1.0, false), "{strategy:?}");
            assert!(!s.poll(t0 + ms(5899), 1, 1.0, false), "{strategy:?}");
            assert!(s.poll(t0 + ms(5900), 1, 1.0, false), "{strategy:?}");
        }
    }

    #[test]
    fn test_rebase_restarts_budget() {
        let t0 = Instant::now();
        let mut s = FrameScheduler::new(PacingStrategy::ResidualAccumulator, SECOND, t0);
        assert!(!s.poll(t0 + ms(900), 1, 1.0, false));
        s.rebase(t0 + ms(900));
        assert!(!s.poll(t0 + ms(1500), 1, 1.0, false));
        assert!(s.poll(t0 + ms(1900), 1, 1.0, false));
    }
}
