//! Scroll-axis geometry for viewport-membership tests
//!
//! The page scrolls along a single axis, so bounds are 1-D bands: a top edge
//! and a height, in the same units as the scroll offset.

/// An element's extent along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window over the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the window's leading edge
    pub offset: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(offset: f64, height: f64) -> Self {
        Self { offset, height }
    }
}

/// One edge of a root margin: absolute or relative to viewport height.
/// Negative values shrink the effective viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Margin {
    Px(f64),
    Percent(f64),
}

impl Margin {
    #[inline]
    fn resolve(&self, viewport_height: f64) -> f64 {
        match self {
            Margin::Px(px) => *px,
            Margin::Percent(pct) => viewport_height * pct / 100.0,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Margin::Px(0.0)
    }
}

/// Margin pair expanding the effective viewport before (start) and after
/// (end) the visible window, mirroring a vertical CSS rootMargin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub start: Margin,
    pub end: Margin,
}

impl RootMargin {
    pub fn px(start: f64, end: f64) -> Self {
        Self {
            start: Margin::Px(start),
            end: Margin::Px(end),
        }
    }

    /// Symmetric margin on both edges
    pub fn both_px(margin: f64) -> Self {
        Self::px(margin, margin)
    }
}

/// Fraction of `target` inside the margin-expanded viewport, in [0, 1]
///
/// Zero-height targets report 1.0 when their edge lies inside the expanded
/// viewport and 0.0 otherwise.
pub fn intersection_ratio(target: Bounds, viewport: Viewport, margin: RootMargin) -> f64 {
    let start = viewport.offset - margin.start.resolve(viewport.height);
    let end = viewport.offset + viewport.height + margin.end.resolve(viewport.height);
    if end <= start {
        return 0.0;
    }
    if target.height <= 0.0 {
        return if target.top >= start && target.top <= end {
            1.0
        } else {
            0.0
        };
    }
    let visible = target.bottom().min(end) - target.top.max(start);
    (visible / target.height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        let ratio = intersection_ratio(
            Bounds::new(10.0, 20.0),
            Viewport::new(0.0, 100.0),
            RootMargin::default(),
        );
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_visible_at_viewport_bottom() {
        let ratio = intersection_ratio(
            Bounds::new(90.0, 20.0),
            Viewport::new(0.0, 100.0),
            RootMargin::default(),
        );
        assert!((ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_outside_viewport() {
        let ratio = intersection_ratio(
            Bounds::new(500.0, 20.0),
            Viewport::new(0.0, 100.0),
            RootMargin::default(),
        );
        assert!(ratio.abs() < 1e-9);
    }

    #[test]
    fn test_end_margin_pre_triggers() {
        // Element 150px below the fold becomes visible with a 200px margin
        let target = Bounds::new(250.0, 40.0);
        let viewport = Viewport::new(0.0, 100.0);
        assert!(intersection_ratio(target, viewport, RootMargin::default()) < 1e-9);
        let ratio = intersection_ratio(target, viewport, RootMargin::px(0.0, 200.0));
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_margin_shrinks_viewport() {
        // Element hugging the fold is not counted with a -100px end margin
        let target = Bounds::new(180.0, 20.0);
        let viewport = Viewport::new(100.0, 100.0);
        assert!(intersection_ratio(target, viewport, RootMargin::default()) > 0.9);
        let ratio = intersection_ratio(target, viewport, RootMargin::px(0.0, -100.0));
        assert!(ratio < 1e-9);
    }

    #[test]
    fn test_percent_margin_scales_with_viewport() {
        let target = Bounds::new(120.0, 10.0);
        let viewport = Viewport::new(0.0, 100.0);
        let margin = RootMargin {
            start: Margin::Px(0.0),
            end: Margin::Percent(50.0),
        };
        assert!((intersection_ratio(target, viewport, margin) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_height_target() {
        let viewport = Viewport::new(0.0, 100.0);
        let inside = Bounds::new(50.0, 0.0);
        let outside = Bounds::new(150.0, 0.0);
        assert!((intersection_ratio(inside, viewport, RootMargin::default()) - 1.0).abs() < 1e-9);
        assert!(intersection_ratio(outside, viewport, RootMargin::default()).abs() < 1e-9);
    }
}
