//! Viewport visibility detection, decoupled from any rendering engine.
//!
//! The card only asks one question through [`VisibilityObserver`]: does my
//! box intersect the viewport, shrunk or grown by this margin? Hosts
//! plug in whatever the platform offers; [`ScrollViewport`] is a plain
//! geometric implementation for scroll offsets measured in pixels.

use serde::{Deserialize, Serialize};

/// Margin applied to the viewport before the intersection test, in CSS
/// order and sign: positive grows the viewport, negative shrinks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// `0px 0px -50px 0px`: a card only counts as entered once it is 50px above
/// the bottom edge.
pub const CARD_ROOT_MARGIN: RootMargin = RootMargin::new(0.0, 0.0, -50.0, 0.0);

/// Reports whether the observed element currently intersects the viewport.
pub trait VisibilityObserver {
    fn is_in_view(&self, margin: RootMargin) -> bool;
}

impl<T: VisibilityObserver + ?Sized> VisibilityObserver for &T {
    fn is_in_view(&self, margin: RootMargin) -> bool {
        (**self).is_in_view(margin)
    }
}

impl<T: VisibilityObserver + ?Sized> VisibilityObserver for Box<T> {
    fn is_in_view(&self, margin: RootMargin) -> bool {
        (**self).is_in_view(margin)
    }
}

/// Vertical scroll geometry in document pixels. Horizontal margins are not
/// consulted since cards always span the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollViewport {
    pub viewport_height: f64,
    pub scroll_offset: f64,
    pub element_top: f64,
    pub element_height: f64,
}

impl ScrollViewport {
    pub fn new(viewport_height: f64, element_top: f64, element_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_offset: 0.0,
            element_top,
            element_height,
        }
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }
}

impl VisibilityObserver for ScrollViewport {
    fn is_in_view(&self, margin: RootMargin) -> bool {
        let root_top = self.scroll_offset - margin.top;
        let root_bottom = self.scroll_offset + self.viewport_height + margin.bottom;
        if root_bottom <= root_top {
            return false;
        }

        // Edge-adjacent counts, as with an IntersectionObserver at threshold 0.
        let element_bottom = self.element_top + self.element_height;
        self.element_top <= root_bottom && element_bottom >= root_top
    }
}

/// A boolean that can only go from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OneShotLatch(bool);

impl OneShotLatch {
    pub fn is_set(self) -> bool {
        self.0
    }

    /// Sets the latch. Returns true only on the call that flipped it.
    pub fn set(&mut self) -> bool {
        let flipped = !self.0;
        self.0 = true;
        flipped
    }
}
