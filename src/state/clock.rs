//! Interval Clock System - Shared tick clocks per interval
//!
//! Provides the external scheduling that drives counter ticks and
//! carousel autoplay. All subscribers at the same interval share a
//! single timer for efficiency and visual sync.
//!
//! # Pattern
//!
//! - Multiple counters ticking every 33ms share one timer
//! - Timer starts with the first subscriber, stops with the last
//! - A monotonic tick count advances once per interval
//!
//! The timer thread only touches an atomic; the owning thread folds the
//! atomic into the tick signal on read via [`get_tick_count`].
//!
//! # Example
//!
//! ```ignore
//! use spark_reveal::state::clock::{subscribe_to_clock, get_tick_count};
//!
//! let unsubscribe = subscribe_to_clock(33);
//!
//! // In the host loop: drive one counter tick per elapsed clock tick
//! let ticks = get_tick_count(33);
//!
//! // Cleanup when done
//! unsubscribe();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use spark_signals::{signal, Signal};

// =============================================================================
// CLOCK REGISTRY
// =============================================================================

/// Per-interval clock registry containing shared timer state
struct ClockRegistry {
    /// Tick signal (local, updated from thread-safe atomic)
    ticks: Signal<u64>,
    /// Thread-safe tick count for cross-thread communication
    ticks_atomic: Arc<AtomicU64>,
    /// Background timer thread handle
    handle: Option<JoinHandle<()>>,
    /// Flag to signal timer thread to stop
    running: Arc<AtomicBool>,
    /// Number of active subscribers
    subscribers: usize,
}

thread_local! {
    /// Map from interval (ms) to clock registry
    static CLOCK_REGISTRIES: RefCell<HashMap<u64, ClockRegistry>> = RefCell::new(HashMap::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to the shared clock at the given interval.
///
/// Returns an unsubscribe function that must be called when done.
/// Multiple subscribers at the same interval share one timer.
///
/// # Arguments
///
/// * `interval_ms` - Milliseconds between ticks. If 0, returns a no-op
///   unsubscribe (no clock is created).
///
/// # Returns
///
/// Unsubscribe function. Call when the owning component is disposed.
pub fn subscribe_to_clock(interval_ms: u64) -> Box<dyn FnOnce()> {
    // Guard against invalid interval (0 would spin the timer thread)
    if interval_ms == 0 {
        return Box::new(|| {}); // No-op unsubscribe
    }

    CLOCK_REGISTRIES.with(|registries| {
        let mut registries = registries.borrow_mut();

        let registry = registries.entry(interval_ms).or_insert_with(|| ClockRegistry {
            ticks: signal(0),
            ticks_atomic: Arc::new(AtomicU64::new(0)),
            handle: None,
            running: Arc::new(AtomicBool::new(false)),
            subscribers: 0,
        });

        registry.subscribers += 1;

        // Start timer if first subscriber
        if registry.subscribers == 1 {
            let ticks_atomic = registry.ticks_atomic.clone();
            let running = registry.running.clone();
            running.store(true, Ordering::SeqCst);

            registry.handle = Some(thread::spawn(move || {
                while running.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(interval_ms));
                    if running.load(Ordering::SeqCst) {
                        ticks_atomic.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }));
        }
    });

    // Return unsubscribe closure
    Box::new(move || {
        CLOCK_REGISTRIES.with(|registries| {
            let mut registries = registries.borrow_mut();
            if let Some(registry) = registries.get_mut(&interval_ms) {
                registry.subscribers = registry.subscribers.saturating_sub(1);

                // Stop timer if no more subscribers
                if registry.subscribers == 0 {
                    registry.running.store(false, Ordering::SeqCst);
                    registry.ticks_atomic.store(0, Ordering::SeqCst); // Reset atomic
                    registry.ticks.set(0); // Reset signal

                    // Note: Thread will exit on next iteration when it checks
                    // the running flag. We don't join here to avoid blocking.
                }
            }
        });
    })
}

/// Get the current tick count for the given interval.
///
/// Returns 0 if no registry exists for this interval.
/// Also syncs the atomic count to the Signal for reactive tracking.
pub fn get_tick_count(interval_ms: u64) -> u64 {
    CLOCK_REGISTRIES.with(|registries| {
        let mut registries = registries.borrow_mut();
        if let Some(registry) = registries.get_mut(&interval_ms) {
            // Sync atomic count to signal
            let ticks = registry.ticks_atomic.load(Ordering::SeqCst);
            if registry.ticks.get() != ticks {
                registry.ticks.set(ticks);
            }
            ticks
        } else {
            0 // No clock, no ticks
        }
    })
}

/// Get the tick signal for the given interval.
///
/// Returns None if no registry exists for this interval.
/// The signal is synced from the atomic count when [`get_tick_count`]
/// is called.
pub fn get_tick_signal(interval_ms: u64) -> Option<Signal<u64>> {
    CLOCK_REGISTRIES.with(|registries| {
        let registries = registries.borrow();
        registries.get(&interval_ms).map(|r| r.ticks.clone())
    })
}

/// Check if a clock is currently running for the given interval.
pub fn is_clock_running(interval_ms: u64) -> bool {
    CLOCK_REGISTRIES.with(|registries| {
        let registries = registries.borrow();
        registries
            .get(&interval_ms)
            .map(|r| r.running.load(Ordering::SeqCst) && r.subscribers > 0)
            .unwrap_or(false)
    })
}

/// Get the number of subscribers for a given interval.
pub fn get_subscriber_count(interval_ms: u64) -> usize {
    CLOCK_REGISTRIES.with(|registries| {
        let registries = registries.borrow();
        registries.get(&interval_ms).map(|r| r.subscribers).unwrap_or(0)
    })
}

/// Reset all clock registries (for testing).
///
/// Stops all timers and clears all registries.
pub fn reset_clocks() {
    CLOCK_REGISTRIES.with(|registries| {
        let mut registries = registries.borrow_mut();

        // Stop all running timers
        for registry in registries.values_mut() {
            registry.running.store(false, Ordering::SeqCst);
            registry.subscribers = 0;
            registry.ticks_atomic.store(0, Ordering::SeqCst);
            registry.ticks.set(0);
        }

        // Clear the map
        registries.clear();
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn setup() {
        reset_clocks();
    }

    #[test]
    fn test_subscribe_returns_unsubscribe() {
        setup();

        let unsubscribe = subscribe_to_clock(50);
        assert_eq!(get_subscriber_count(50), 1);

        unsubscribe();
        assert_eq!(get_subscriber_count(50), 0);
    }

    #[test]
    fn test_shared_clock_same_interval() {
        setup();

        // Two subscriptions at the same interval share one registry
        let unsub1 = subscribe_to_clock(50);
        let unsub2 = subscribe_to_clock(50);

        assert_eq!(get_subscriber_count(50), 2);

        let registry_count = CLOCK_REGISTRIES.with(|r| r.borrow().len());
        assert_eq!(registry_count, 1);

        unsub1();
        assert_eq!(get_subscriber_count(50), 1);
        assert!(is_clock_running(50));

        unsub2();
        assert_eq!(get_subscriber_count(50), 0);
    }

    #[test]
    fn test_different_intervals_separate_clocks() {
        setup();

        let _unsub1 = subscribe_to_clock(33);
        let _unsub2 = subscribe_to_clock(5000);

        let registry_count = CLOCK_REGISTRIES.with(|r| r.borrow().len());
        assert_eq!(registry_count, 2);

        assert_eq!(get_subscriber_count(33), 1);
        assert_eq!(get_subscriber_count(5000), 1);
    }

    #[test]
    fn test_ticks_advance() {
        setup();

        // Short interval for a fast test
        let _unsub = subscribe_to_clock(10);

        assert_eq!(get_tick_count(10), 0);

        thread::sleep(Duration::from_millis(60));

        // At least a few ticks must have elapsed
        assert!(get_tick_count(10) >= 2);
    }

    #[test]
    fn test_unsubscribe_stops_clock() {
        setup();

        let unsub = subscribe_to_clock(50);
        assert!(is_clock_running(50));

        unsub();

        CLOCK_REGISTRIES.with(|registries| {
            let registries = registries.borrow();
            if let Some(registry) = registries.get(&50) {
                assert!(!registry.running.load(Ordering::SeqCst));
                assert_eq!(registry.ticks_atomic.load(Ordering::SeqCst), 0);
            }
        });
    }

    #[test]
    fn test_resubscribe_restarts_clock() {
        setup();

        let unsub1 = subscribe_to_clock(50);
        assert!(is_clock_running(50));

        unsub1();
        assert!(!is_clock_running(50));

        let _unsub2 = subscribe_to_clock(50);
        assert!(is_clock_running(50));
    }

    #[test]
    fn test_zero_interval_noop() {
        setup();

        let unsub = subscribe_to_clock(0);

        let registry_count = CLOCK_REGISTRIES.with(|r| r.borrow().len());
        assert_eq!(registry_count, 0);

        assert_eq!(get_tick_count(0), 0);

        // Calling unsubscribe should be safe
        unsub();
    }
}
