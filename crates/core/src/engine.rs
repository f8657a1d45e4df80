use std::time::Instant;

use crate::snapshot::RenderSnapshot;
use crate::types::{Action, GameStatus};

/// The call surface a front end drives every evaluation:
/// `apply_action -> advance_if_due -> snapshot`.
pub trait Engine {
    /// Feed one abstract action. While paused only `Pause` and `Terminate` apply.
    fn apply_action(&mut self, action: Action);

    /// One simulation step, ignoring the scheduler.
    fn tick(&mut self);

    /// Tick when the frame scheduler says a tick is due at `now`.
    ///
    /// Returns true when a tick fired.
    fn advance_if_due_at(&mut self, now: Instant) -> bool;

    fn advance_if_due(&mut self) -> bool {
        self.advance_if_due_at(Instant::now())
    }

    fn snapshot(&self) -> RenderSnapshot;

    fn status(&self) -> GameStatus;

    /// Restore the initial round state, keeping the high score and random source.
    fn reset(&mut self);
}
