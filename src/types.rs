//! Core types for spark-reveal.
//!
//! Regions and viewports are vertical spans of a scrollable document,
//! measured in rows. Everything else in the crate builds on these.

// =============================================================================
// Region
// =============================================================================

/// A vertical span of the document that can be observed for visibility.
///
/// `top` is the row where the region starts (document coordinates),
/// `height` is the number of rows it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionRect {
    pub top: u32,
    pub height: u32,
}

impl RegionRect {
    /// Create a region spanning `height` rows starting at `top`.
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Row just past the end of the region.
    pub const fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// The currently visible span of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub top: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a viewport showing `height` rows starting at `top`.
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Row just past the end of the viewport.
    pub const fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

// =============================================================================
// Intersection
// =============================================================================

/// Fraction of a region currently inside the viewport, in `[0.0, 1.0]`.
///
/// A zero-height region counts as fully visible when its top row falls
/// inside the viewport, and invisible otherwise.
pub fn visible_fraction(rect: RegionRect, viewport: Viewport) -> f32 {
    if rect.height == 0 {
        let inside = rect.top >= viewport.top && rect.top < viewport.bottom();
        return if inside { 1.0 } else { 0.0 };
    }

    let overlap_top = rect.top.max(viewport.top);
    let overlap_bottom = rect.bottom().min(viewport.bottom());

    if overlap_bottom <= overlap_top {
        return 0.0;
    }

    (overlap_bottom - overlap_top) as f32 / rect.height as f32
}

// =============================================================================
// Tests
// =============================================================================
