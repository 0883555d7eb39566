//! Carousel State - Cyclic index over a fixed item sequence
//!
//! A small state machine for rotating displays (the testimonial rotator):
//! states are the indices `[0, len)`, transitions are `next`, `prev`, and
//! `select(k)`, the initial state is 0. `next`/`prev` wrap; `select`
//! ignores out-of-range indices. Display logic must never hard-fail, so
//! every operation is a no-op on an empty carousel.
//!
//! Autoplay is not part of this state: if wanted, it is external
//! scheduling that calls [`Carousel::next`] on a
//! [`clock`](super::clock) subscription and releases it on unmount.

use spark_signals::{signal, Signal};

// =============================================================================
// CAROUSEL
// =============================================================================

/// Cyclically-indexed rotating display over `items`.
///
/// The index lives in a signal so render effects re-run on rotation.
pub struct Carousel<T> {
    items: Vec<T>,
    index: Signal<usize>,
}

impl<T> Carousel<T> {
    /// Carousel starting at index 0.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: signal(0),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the carousel has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current index, in `[0, len)` for non-empty carousels.
    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    /// The index signal, for reactive tracking.
    pub fn index_signal(&self) -> Signal<usize> {
        self.index.clone()
    }

    /// The currently shown item, `None` when empty.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index.get())
    }

    /// All items, in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Advance to the next item, wrapping past the end.
    pub fn next(&self) {
        if self.items.is_empty() {
            return;
        }
        self.index.set((self.index.get() + 1) % self.items.len());
    }

    /// Step back to the previous item, wrapping before the start.
    pub fn prev(&self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.index.set((self.index.get() + len - 1) % len);
    }

    /// Jump directly to `index`. No-op when out of range.
    pub fn select(&self, index: usize) {
        if index < self.items.len() {
            self.index.set(index);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel<&'static str> {
        Carousel::new(vec!["a", "b", "c"])
    }

    #[test]
    fn test_starts_at_zero() {
        let c = carousel();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current(), Some(&"a"));
    }

    #[test]
    fn test_next_wraps() {
        let c = carousel();
        c.next();
        assert_eq!(c.current_index(), 1);
        c.next();
        assert_eq!(c.current_index(), 2);
        c.next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let c = carousel();
        c.prev();
        assert_eq!(c.current_index(), 2);
        c.prev();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_select_valid() {
        let c = carousel();
        c.select(2);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.current(), Some(&"c"));
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let c = carousel();
        c.select(1);
        c.select(5);
        assert_eq!(c.current_index(), 1);
        c.select(3); // len itself is out of range
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let c: Carousel<&str> = Carousel::new(vec![]);
        c.next();
        c.prev();
        c.select(0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current(), None);
        assert!(c.is_empty());
    }

    #[test]
    fn test_index_signal_tracks_rotation() {
        let c = carousel();
        let index = c.index_signal();
        c.next();
        assert_eq!(index.get(), 1);
        c.select(0);
        assert_eq!(index.get(), 0);
    }
}
