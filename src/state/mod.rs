//! State Module - Reveal animation state systems
//!
//! The reactive state systems behind scroll-triggered reveals:
//!
//! - **Visibility** - One-shot viewport entry detection, latch signals
//! - **Reveal** - Staggered hidden/revealed presentation instructions
//! - **Counter** - Tick-driven count-up animation with exact termination
//! - **Carousel** - Cyclic index state for rotating displays
//! - **Clock** - Shared interval timers that drive ticks and autoplay

pub mod carousel;
pub mod clock;
pub mod counter;
pub mod reveal;
pub mod visibility;

pub use carousel::Carousel;
pub use counter::CounterState;
pub use reveal::{RevealController, RevealInstruction};
pub use visibility::{
    has_entered, observe, release, set_viewport, ObservedRegion, RegionId,
};
