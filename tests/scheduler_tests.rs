//! Frame scheduler tests - both pacing strategies against a simulated clock

use std::time::{Duration, Instant};

use brick_game::core::{FrameScheduler, PacingStrategy};
use brick_game::types::SNAKE_BOOST_FACTOR;

const BASE: Duration = Duration::from_millis(1000);

fn count_ticks(
    strategy: PacingStrategy,
    speed: u32,
    boost: f64,
    step: Duration,
    steps: u32,
) -> u32 {
    let t0 = Instant::now();
    let mut scheduler = FrameScheduler::new(strategy, BASE, t0);
    (1..=steps)
        .filter(|&i| scheduler.poll(t0 + step * i, speed, boost, false))
        .count() as u32
}

#[test]
fn test_both_strategies_agree_on_exact_multiples() {
    for strategy in [
        PacingStrategy::RecomputedBudget,
        PacingStrategy::ResidualAccumulator,
    ] {
        // 10s in 100ms steps: one tick per second.
        assert_eq!(
            count_ticks(strategy, 1, 1.0, Duration::from_millis(100), 100),
            10,
            "{strategy:?}"
        );
    }
}

#[test]
fn test_residual_does_not_lose_drift() {
    // 300ms polls against a 1000ms budget: the recomputed strategy waits for
    // 1200ms each time, the residual one carries the overshoot.
    let step = Duration::from_millis(300);
    let recomputed = count_ticks(PacingStrategy::RecomputedBudget, 1, 1.0, step, 40);
    let residual = count_ticks(PacingStrategy::ResidualAccumulator, 1, 1.0, step, 40);
    assert_eq!(recomputed, 10);
    assert_eq!(residual, 12);
}

#[test]
fn test_boost_raises_tick_rate() {
    let step = Duration::from_millis(10);
    let plain = count_ticks(PacingStrategy::RecomputedBudget, 1, 1.0, step, 600);
    let boosted = count_ticks(
        PacingStrategy::RecomputedBudget,
        1,
        SNAKE_BOOST_FACTOR,
        step,
        600,
    );
    // 10ms polling rounds each 667ms budget up to 670ms.
    assert_eq!(plain, 6);
    assert_eq!(boosted, 8);
}

#[test]
fn test_level_ten_is_ten_times_faster() {
    let t0 = Instant::now();
    let scheduler = FrameScheduler::new(PacingStrategy::ResidualAccumulator, BASE, t0);
    assert_eq!(scheduler.delay(10, 1.0) * 10, scheduler.delay(1, 1.0));
}
