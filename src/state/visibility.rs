//! Visibility Observer - One-shot viewport entry detection
//!
//! Watches document regions and reports, once per region lifetime, the
//! moment the region's visible fraction reaches a threshold.
//!
//! There is no polling anywhere in this module: the host reports viewport
//! movement via [`set_viewport`], and each report is the intersection
//! event that evaluates thresholds and fires pending callbacks. The
//! entered flag is a one-shot latch: it transitions false -> true exactly
//! once and never reverts, so a region scrolled out and back in does not
//! re-trigger anything.
//!
//! # Example
//!
//! ```ignore
//! use spark_reveal::state::visibility::{observe, release, set_viewport, has_entered};
//! use spark_reveal::types::{RegionRect, Viewport};
//!
//! let region = observe(RegionRect::new(40, 10), 0.2, || {
//!     // fires once, the first time 20% of the region is visible
//! });
//!
//! set_viewport(Viewport::new(30, 24));
//! assert!(has_entered(region));
//!
//! release(region); // idempotent, safe on every exit path
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use spark_signals::{signal, Signal};

use crate::types::{visible_fraction, RegionRect, Viewport};

// =============================================================================
// REGION ID
// =============================================================================

/// Opaque handle for an observed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

// =============================================================================
// OBSERVATION REGISTRY
// =============================================================================

/// One registered observation: the watched span, its threshold, the
/// one-shot latch, and the pending callback (taken when fired).
struct Observation {
    rect: RegionRect,
    threshold: f32,
    entered: Signal<bool>,
    on_enter: Option<Box<dyn FnOnce()>>,
}

thread_local! {
    /// Map from region id to observation.
    static OBSERVATIONS: RefCell<HashMap<usize, Observation>> = RefCell::new(HashMap::new());

    /// Next region id to allocate (monotonic).
    static NEXT_REGION_ID: Cell<usize> = const { Cell::new(0) };

    /// Current viewport as last reported by the host.
    static VIEWPORT: Cell<Viewport> = const { Cell::new(Viewport { top: 0, height: 0 }) };
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Register an observation on `rect`.
///
/// `on_enter` is invoked at most once per region lifetime: the first time
/// the region's visible fraction reaches or exceeds `threshold` (clamped
/// to `[0.0, 1.0]`). If the region already meets the threshold against
/// the current viewport, `on_enter` fires immediately before `observe`
/// returns - above-the-fold content must not be skipped.
///
/// # Arguments
///
/// * `rect` - The document span to watch
/// * `threshold` - Required visible fraction, 0.0 to 1.0
/// * `on_enter` - Callback fired once on first threshold crossing
///
/// # Returns
///
/// The region handle. Pass it to [`release`] on every exit path, or hold
/// an [`ObservedRegion`] guard instead.
pub fn observe(rect: RegionRect, threshold: f32, on_enter: impl FnOnce() + 'static) -> RegionId {
    let id = NEXT_REGION_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    OBSERVATIONS.with(|observations| {
        observations.borrow_mut().insert(
            id,
            Observation {
                rect,
                threshold: threshold.clamp(0.0, 1.0),
                entered: signal(false),
                on_enter: Some(Box::new(on_enter)),
            },
        );
    });

    // Already-visible regions fire immediately (treated as an
    // intersection event at observe-time).
    let viewport = VIEWPORT.with(|vp| vp.get());
    fire_pending(viewport, Some(id));

    RegionId(id)
}

/// Release an observation.
///
/// Safe to call any number of times, including on already-released or
/// never-observed ids.
pub fn release(region: RegionId) {
    OBSERVATIONS.with(|observations| {
        observations.borrow_mut().remove(&region.0);
    });
}

/// Report viewport movement.
///
/// This is the intersection event: every observation whose visible
/// fraction now meets its threshold (and has not entered yet) latches
/// and fires its callback, in region-id order.
pub fn set_viewport(viewport: Viewport) {
    VIEWPORT.with(|vp| vp.set(viewport));
    fire_pending(viewport, None);
}

/// The viewport as last reported by the host.
pub fn current_viewport() -> Viewport {
    VIEWPORT.with(|vp| vp.get())
}

/// Whether the region's one-shot latch has fired.
///
/// Returns `false` for released or unknown ids.
pub fn has_entered(region: RegionId) -> bool {
    OBSERVATIONS.with(|observations| {
        observations
            .borrow()
            .get(&region.0)
            .map(|o| o.entered.get())
            .unwrap_or(false)
    })
}

/// The latch signal for a region, for reactive tracking.
///
/// Returns `None` for released or unknown ids.
pub fn entered_signal(region: RegionId) -> Option<Signal<bool>> {
    OBSERVATIONS.with(|observations| {
        observations
            .borrow()
            .get(&region.0)
            .map(|o| o.entered.clone())
    })
}

/// Number of live observations.
pub fn observation_count() -> usize {
    OBSERVATIONS.with(|observations| observations.borrow().len())
}

/// Reset all visibility state (for testing).
pub fn reset_visibility_state() {
    OBSERVATIONS.with(|observations| observations.borrow_mut().clear());
    NEXT_REGION_ID.with(|next| next.set(0));
    VIEWPORT.with(|vp| vp.set(Viewport::default()));
}

// =============================================================================
// LATCH EVALUATION
// =============================================================================

/// Latch and collect the callbacks of every observation that crosses its
/// threshold, then run them outside the registry borrow. Callbacks may
/// themselves observe or release, so holding the borrow across them
/// would re-entrantly panic.
fn fire_pending(viewport: Viewport, only: Option<usize>) {
    let mut fired: Vec<(usize, Box<dyn FnOnce()>)> = OBSERVATIONS.with(|observations| {
        let mut observations = observations.borrow_mut();
        let mut fired = Vec::new();

        for (&id, observation) in observations.iter_mut() {
            if let Some(target) = only {
                if id != target {
                    continue;
                }
            }
            if observation.entered.get() {
                continue;
            }
            if visible_fraction(observation.rect, viewport) >= observation.threshold {
                observation.entered.set(true);
                if let Some(callback) = observation.on_enter.take() {
                    fired.push((id, callback));
                }
            }
        }

        fired
    });

    // Region-id order mirrors observation order for same-event firings.
    fired.sort_by_key(|(id, _)| *id);
    for (_, callback) in fired {
        callback();
    }
}

// =============================================================================
// SCOPED GUARD
// =============================================================================

/// Scoped observation that releases itself on drop.
///
/// Use this when the observation should live exactly as long as the
/// owning component; `Drop` covers every exit path.
pub struct ObservedRegion {
    id: RegionId,
}

impl ObservedRegion {
    /// Observe `rect`, releasing automatically when the guard drops.
    pub fn new(rect: RegionRect, threshold: f32, on_enter: impl FnOnce() + 'static) -> Self {
        Self {
            id: observe(rect, threshold, on_enter),
        }
    }

    /// The underlying region handle.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Whether the latch has fired.
    pub fn has_entered(&self) -> bool {
        has_entered(self.id)
    }
}

impl Drop for ObservedRegion {
    fn drop(&mut self) {
        release(self.id);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_visibility_state();
    }

    fn counting_callback() -> (Rc<Cell<u32>>, impl FnOnce()) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        (count, move || count_clone.set(count_clone.get() + 1))
    }

    #[test]
    fn test_fires_on_threshold_crossing() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let (count, callback) = counting_callback();
        let region = observe(RegionRect::new(100, 10), 0.2, callback);

        assert_eq!(count.get(), 0);
        assert!(!has_entered(region));

        // Scroll the region into view
        set_viewport(Viewport::new(95, 24));

        assert_eq!(count.get(), 1);
        assert!(has_entered(region));
    }

    #[test]
    fn test_fires_exactly_once() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let (count, callback) = counting_callback();
        let region = observe(RegionRect::new(100, 10), 0.2, callback);

        // In, out, in, out, in
        set_viewport(Viewport::new(95, 24));
        set_viewport(Viewport::new(0, 24));
        set_viewport(Viewport::new(95, 24));
        set_viewport(Viewport::new(0, 24));
        set_viewport(Viewport::new(95, 24));

        assert_eq!(count.get(), 1);
        assert!(has_entered(region));
    }

    #[test]
    fn test_latch_never_reverts() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let region = observe(RegionRect::new(100, 10), 0.2, || {});
        set_viewport(Viewport::new(95, 24));
        assert!(has_entered(region));

        // Scrolling away must not clear the latch
        set_viewport(Viewport::new(0, 24));
        assert!(has_entered(region));
    }

    #[test]
    fn test_already_visible_fires_immediately() {
        setup();
        set_viewport(Viewport::new(0, 24));

        // Above-the-fold region: fully visible at observe-time
        let (count, callback) = counting_callback();
        let region = observe(RegionRect::new(0, 10), 0.5, callback);

        assert_eq!(count.get(), 1);
        assert!(has_entered(region));
    }

    #[test]
    fn test_threshold_respected() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let (count, callback) = counting_callback();
        // Region rows 20..30: 4 of 10 rows visible -> fraction 0.4
        let region = observe(RegionRect::new(20, 10), 0.5, callback);

        assert_eq!(count.get(), 0);
        assert!(!has_entered(region));

        // One more row visible -> fraction 0.5
        set_viewport(Viewport::new(1, 24));
        assert_eq!(count.get(), 1);
        assert!(has_entered(region));
    }

    #[test]
    fn test_release_is_idempotent() {
        setup();

        let region = observe(RegionRect::new(100, 10), 0.2, || {});
        assert_eq!(observation_count(), 1);

        release(region);
        release(region);
        release(region);
        assert_eq!(observation_count(), 0);
        assert!(!has_entered(region));
    }

    #[test]
    fn test_released_region_never_fires() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let (count, callback) = counting_callback();
        let region = observe(RegionRect::new(100, 10), 0.2, callback);
        release(region);

        set_viewport(Viewport::new(95, 24));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_scoped_guard_releases_on_drop() {
        setup();

        {
            let _guard = ObservedRegion::new(RegionRect::new(100, 10), 0.2, || {});
            assert_eq!(observation_count(), 1);
        }
        assert_eq!(observation_count(), 0);
    }

    #[test]
    fn test_entered_signal_tracks_latch() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let region = observe(RegionRect::new(100, 10), 0.2, || {});
        let entered = entered_signal(region).unwrap();
        assert!(!entered.get());

        set_viewport(Viewport::new(95, 24));
        assert!(entered.get());
    }

    #[test]
    fn test_threshold_clamped() {
        setup();
        set_viewport(Viewport::new(0, 24));

        // Absurd threshold clamps to 1.0 and fires when fully visible
        let (count, callback) = counting_callback();
        observe(RegionRect::new(30, 10), 5.0, callback);

        set_viewport(Viewport::new(30, 24));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_callback_may_release_other_region() {
        setup();
        set_viewport(Viewport::new(0, 24));

        let first = observe(RegionRect::new(100, 10), 0.2, || {});
        let _second = observe(RegionRect::new(100, 10), 0.2, move || {
            release(first);
        });

        // Both cross at once; the second's callback releases the first
        set_viewport(Viewport::new(95, 24));
        assert_eq!(observation_count(), 1);
    }
}
