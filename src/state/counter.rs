//! Counter Animator - Tick-driven count-up to a target value
//!
//! Animates a displayed number from 0 to a target over a fixed number of
//! equal ticks. The produced sequence is finite, non-decreasing, bounded
//! by the target, and terminates at exactly the target (no overshoot).
//!
//! The counter never schedules itself: the owner starts it once its
//! visibility latch has fired and drives [`CounterState::tick`] from an
//! external schedule (a [`clock`](super::clock) subscription or the host
//! loop). Dropping the tick source is the cancellation path.
//!
//! # Example
//!
//! ```ignore
//! use spark_reveal::state::counter::CounterState;
//!
//! let counter = CounterState::new(45.0, 60);
//! counter.start();
//! while counter.tick() {}
//! assert_eq!(counter.current(), 45.0);
//! assert_eq!(counter.display(), "45");
//! ```

use spark_signals::{signal, Signal};

// =============================================================================
// COUNTER STATE
// =============================================================================

/// Animation state for one counted-up statistic.
///
/// `current` lives in a signal so render effects re-run on every tick.
pub struct CounterState {
    target: f64,
    step_count: u32,
    current: Signal<f64>,
    animating: Signal<bool>,
}

impl CounterState {
    /// Counter toward `target` over `step_count` equal ticks.
    ///
    /// Negative targets are clamped to 0; a zero `step_count` or zero
    /// target completes on start.
    pub fn new(target: f64, step_count: u32) -> Self {
        Self {
            target: target.max(0.0),
            step_count,
            current: signal(0.0),
            animating: signal(false),
        }
    }

    /// The value the animation terminates at.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current displayed value, in `[0, target]`.
    pub fn current(&self) -> f64 {
        self.current.get()
    }

    /// The current-value signal, for reactive tracking.
    pub fn current_signal(&self) -> Signal<f64> {
        self.current.clone()
    }

    /// Whether ticks are still advancing the value.
    pub fn is_animating(&self) -> bool {
        self.animating.get()
    }

    /// Whether the terminal state has been reached.
    pub fn is_finished(&self) -> bool {
        self.current.get() >= self.target && !self.animating.get() && self.started()
    }

    fn started(&self) -> bool {
        self.animating.get() || self.current.get() > 0.0 || self.target == 0.0
    }

    /// Arm the animation. Callers gate this on the owning visibility
    /// latch; the counter itself knows nothing about scroll position.
    ///
    /// No-op while already animating. Degenerate inputs (zero target or
    /// zero step count) complete immediately.
    pub fn start(&self) {
        if self.animating.get() {
            return;
        }
        if self.target == 0.0 || self.step_count == 0 {
            self.current.set(self.target);
            return;
        }
        self.current.set(0.0);
        self.animating.set(true);
    }

    /// Advance by one tick (`target / step_count`), clamping to exactly
    /// the target on the final step.
    ///
    /// Returns `true` while the animation is still running after the
    /// tick. No-op (returning `false`) when not animating.
    pub fn tick(&self) -> bool {
        if !self.animating.get() {
            return false;
        }

        let increment = self.target / self.step_count as f64;
        let next = self.current.get() + increment;

        if next >= self.target {
            self.current.set(self.target);
            self.animating.set(false);
            false
        } else {
            self.current.set(next);
            true
        }
    }

    /// Milliseconds between ticks for a total duration of `duration_ms`.
    pub fn tick_interval_ms(&self, duration_ms: u64) -> u64 {
        if self.step_count == 0 {
            return duration_ms;
        }
        duration_ms / self.step_count as u64
    }

    /// Back to idle at 0.
    pub fn reset(&self) {
        self.current.set(0.0);
        self.animating.set(false);
    }

    /// Display string for the current value.
    ///
    /// Integer targets render whole numbers (floored while animating);
    /// non-integer targets render one fractional digit.
    pub fn display(&self) -> String {
        if self.target.fract() == 0.0 {
            format!("{}", self.current.get().floor() as i64)
        } else {
            format!("{:.1}", self.current.get())
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminates_at_exact_target() {
        // The stats section's real parameters: 45 over 2000ms in 60 steps
        let counter = CounterState::new(45.0, 60);
        counter.start();

        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
            assert!(ticks < 1000, "animation must terminate");
        }

        assert_eq!(counter.current(), 45.0);
        assert!(!counter.is_animating());
        assert!(counter.is_finished());
    }

    #[test]
    fn test_non_decreasing_and_bounded() {
        let counter = CounterState::new(45.0, 60);
        counter.start();

        let mut previous = counter.current();
        loop {
            let running = counter.tick();
            let value = counter.current();
            assert!(value >= previous, "sequence must be non-decreasing");
            assert!(value <= 45.0, "sequence must never exceed the target");
            previous = value;
            if !running {
                break;
            }
        }
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let counter = CounterState::new(45.0, 60);
        assert!(!counter.tick());
        assert_eq!(counter.current(), 0.0);
    }

    #[test]
    fn test_start_while_animating_is_noop() {
        let counter = CounterState::new(45.0, 60);
        counter.start();
        counter.tick();
        let mid = counter.current();

        counter.start();
        assert_eq!(counter.current(), mid);
        assert!(counter.is_animating());
    }

    #[test]
    fn test_zero_target_completes_on_start() {
        let counter = CounterState::new(0.0, 60);
        counter.start();
        assert!(!counter.is_animating());
        assert!(counter.is_finished());
        assert_eq!(counter.display(), "0");
    }

    #[test]
    fn test_zero_steps_completes_on_start() {
        let counter = CounterState::new(45.0, 0);
        counter.start();
        assert!(!counter.is_animating());
        assert_eq!(counter.current(), 45.0);
    }

    #[test]
    fn test_negative_target_clamped() {
        let counter = CounterState::new(-10.0, 60);
        assert_eq!(counter.target(), 0.0);
    }

    #[test]
    fn test_integer_display_floors() {
        let counter = CounterState::new(18.0, 60);
        counter.start();
        counter.tick(); // 0.3
        assert_eq!(counter.display(), "0");

        while counter.tick() {}
        assert_eq!(counter.display(), "18");
    }

    #[test]
    fn test_fractional_display_one_digit() {
        let counter = CounterState::new(4.5, 10);
        counter.start();
        while counter.tick() {}
        assert_eq!(counter.display(), "4.5");
    }

    #[test]
    fn test_tick_interval() {
        let counter = CounterState::new(45.0, 60);
        assert_eq!(counter.tick_interval_ms(2000), 33);

        let degenerate = CounterState::new(45.0, 0);
        assert_eq!(degenerate.tick_interval_ms(2000), 2000);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let counter = CounterState::new(45.0, 60);
        counter.start();
        counter.tick();
        counter.reset();

        assert_eq!(counter.current(), 0.0);
        assert!(!counter.is_animating());
    }
}
