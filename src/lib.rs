//! # spark-reveal
//!
//! Scroll-triggered reveal animation state for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! The crate is a set of small state machines a host render loop drives:
//! the host reports viewport movement, spark-reveal latches visibility
//! (once per region, never replayed), and hands back per-item
//! presentation instructions. Timers live in shared per-interval clocks;
//! the background timer thread only touches atomics, which the owning
//! thread folds into signals on read.
//!
//! ```text
//! host scroll event → set_viewport → one-shot latch → reveal instructions
//!                                      │
//!                                      └→ counter start → clock ticks → display value
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Regions, viewports, visible-fraction math
//! - [`state`] - Visibility latching, reveal stagger, counters, carousel, clocks
//! - [`form`] - Contact form validation and pluggable submission
//! - [`content`] - Immutable site content tables and article markup

pub mod content;
pub mod form;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use state::{
    // Visibility
    has_entered, observe, release, set_viewport, ObservedRegion, RegionId,
    // Reveal
    RevealController, RevealInstruction,
    // Counter
    CounterState,
    // Carousel
    Carousel,
};

pub use state::clock::{
    get_tick_count, get_tick_signal, is_clock_running, subscribe_to_clock,
};

pub use form::{
    validate, ContactDraft, ContactFormState, ContactSubmission, Field, FieldError,
    SimulatedSubmission, SubmissionService, SubmitPhase,
};

pub use content::{find_post, parse, Block};
