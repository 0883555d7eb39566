//! Reveal Controller - Staggered hidden/revealed presentation instructions
//!
//! Computes, for each item in a list, the presentation instruction the
//! renderer should apply: hidden (transparent, offset downward) before
//! the owning visibility latch fires, revealed (opaque, in place) after,
//! with a per-item stagger delay so items animate in sequence.
//!
//! The controller only ever consumes the one-shot latch, never raw
//! intersection state, so scroll oscillation can never replay the
//! transition.
//!
//! # Example
//!
//! ```ignore
//! use spark_reveal::state::reveal::RevealController;
//! use spark_reveal::state::visibility::has_entered;
//!
//! let reveal = RevealController::new(4).with_stagger_step(100);
//!
//! for (i, instruction) in reveal.instructions(has_entered(region)).iter().enumerate() {
//!     // instruction.transition_delay_ms == i * 100
//! }
//! ```

// =============================================================================
// INSTRUCTION
// =============================================================================

/// Per-item presentation instruction.
///
/// `opacity` is 0 (hidden) or 1 (revealed); `translate_y` is the downward
/// offset applied while hidden; `transition_delay_ms` is the item's
/// stagger delay, identical in both states so the transition between
/// them is staggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealInstruction {
    pub opacity: u8,
    pub translate_y: i16,
    pub transition_delay_ms: u64,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Default downward offset while hidden.
pub const DEFAULT_HIDDEN_OFFSET: i16 = 8;

/// Default per-item stagger step in milliseconds.
pub const DEFAULT_STAGGER_STEP_MS: u64 = 100;

/// Computes staggered reveal instructions for a list of items sharing
/// one visibility latch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealController {
    count: usize,
    base_delay_ms: u64,
    stagger_step_ms: u64,
    hidden_offset: i16,
}

impl RevealController {
    /// Controller for `count` items with default base delay (0), stagger
    /// step (100 ms), and hidden offset (8).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            base_delay_ms: 0,
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            hidden_offset: DEFAULT_HIDDEN_OFFSET,
        }
    }

    /// Delay applied to every item before staggering starts.
    pub fn with_base_delay(mut self, base_delay_ms: u64) -> Self {
        self.base_delay_ms = base_delay_ms;
        self
    }

    /// Additional delay per item index.
    pub fn with_stagger_step(mut self, stagger_step_ms: u64) -> Self {
        self.stagger_step_ms = stagger_step_ms;
        self
    }

    /// Downward offset applied while hidden.
    pub fn with_hidden_offset(mut self, hidden_offset: i16) -> Self {
        self.hidden_offset = hidden_offset;
        self
    }

    /// Number of items under this controller.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Effective delay for item `index`: `base + index * step`.
    ///
    /// Monotonically non-decreasing in `index`.
    pub fn effective_delay(&self, index: usize) -> u64 {
        self.base_delay_ms + index as u64 * self.stagger_step_ms
    }

    /// Instruction for item `index` given the latch state.
    pub fn instruction(&self, index: usize, entered: bool) -> RevealInstruction {
        if entered {
            RevealInstruction {
                opacity: 1,
                translate_y: 0,
                transition_delay_ms: self.effective_delay(index),
            }
        } else {
            RevealInstruction {
                opacity: 0,
                translate_y: self.hidden_offset,
                transition_delay_ms: self.effective_delay(index),
            }
        }
    }

    /// Instructions for all items, in index order.
    pub fn instructions(&self, entered: bool) -> Vec<RevealInstruction> {
        (0..self.count).map(|i| self.instruction(i, entered)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
