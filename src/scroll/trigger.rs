use crate::geometry::{Edge, Rect, Viewport};

/// "Element edge meets viewport line", e.g. top of the section at 85% of the
/// viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Edge,
    /// Fraction of the viewport height, measured from the top.
    pub viewport: f64,
}

impl TriggerPoint {
    pub const fn new(element: Edge, viewport: f64) -> Self {
        Self { element, viewport }
    }

    pub const fn top_at(viewport: f64) -> Self {
        Self::new(Edge::Top, viewport)
    }

    /// Pixels of scrolling left before the point is reached; negative once passed.
    pub fn remaining(&self, rect: &Rect, viewport: &Viewport) -> f64 {
        rect.edge(self.element) - self.viewport * viewport.height
    }

    pub fn reached(&self, rect: &Rect, viewport: &Viewport) -> bool {
        self.remaining(rect, viewport) <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEnd {
    At(TriggerPoint),
    /// A fixed scroll distance past the start point.
    Distance(f64),
}

/// Continuous position of the scroll between `start` and `end`, clamped to `[0, 1]`.
/// Depends only on the current layout, so scrolling back replays it in reverse.
pub fn scrub_progress(rect: &Rect, viewport: &Viewport, start: TriggerPoint, end: ScrollEnd) -> f64 {
    let before_start = start.remaining(rect, viewport);
    let span = match end {
        ScrollEnd::At(point) => point.remaining(rect, viewport) - before_start,
        ScrollEnd::Distance(distance) => distance,
    };
    if !(span > 0.0) {
        return if before_start <= 0.0 { 1.0 } else { 0.0 };
    }
    (-before_start / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport { width: 1280.0, height: 800.0 };

    #[test]
    fn entrance_fires_once_the_top_crosses_the_line() {
        let start = TriggerPoint::top_at(0.85);
        assert!(!start.reached(&Rect::new(0.0, 700.0, 100.0, 400.0), &VIEW));
        assert!(start.reached(&Rect::new(0.0, 680.0, 100.0, 400.0), &VIEW));
        assert!(start.reached(&Rect::new(0.0, -2000.0, 100.0, 400.0), &VIEW));
    }

    #[test]
    fn full_pass_through_the_viewport_maps_linearly() {
        let start = TriggerPoint::new(Edge::Top, 1.0);
        let end = ScrollEnd::At(TriggerPoint::new(Edge::Bottom, 0.0));
        let card = |top| Rect::new(0.0, top, 300.0, 400.0);

        assert_eq!(scrub_progress(&card(900.0), &VIEW, start, end), 0.0);
        assert_eq!(scrub_progress(&card(800.0), &VIEW, start, end), 0.0);
        assert_eq!(scrub_progress(&card(200.0), &VIEW, start, end), 0.5);
        assert_eq!(scrub_progress(&card(-400.0), &VIEW, start, end), 1.0);
        assert_eq!(scrub_progress(&card(-900.0), &VIEW, start, end), 1.0);
    }

    #[test]
    fn scrolling_back_returns_the_same_progress() {
        let start = TriggerPoint::new(Edge::Top, 0.0);
        let end = ScrollEnd::Distance(1000.0);
        let forward = scrub_progress(&Rect::new(0.0, -250.0, 0.0, 800.0), &VIEW, start, end);
        let _further = scrub_progress(&Rect::new(0.0, -750.0, 0.0, 800.0), &VIEW, start, end);
        let back = scrub_progress(&Rect::new(0.0, -250.0, 0.0, 800.0), &VIEW, start, end);
        assert_eq!(forward, 0.25);
        assert_eq!(forward, back);
    }

    #[test]
    fn degenerate_span_snaps_to_an_end() {
        let start = TriggerPoint::top_at(0.5);
        let end = ScrollEnd::Distance(0.0);
        assert_eq!(scrub_progress(&Rect::new(0.0, 500.0, 0.0, 10.0), &VIEW, start, end), 0.0);
        assert_eq!(scrub_progress(&Rect::new(0.0, 100.0, 0.0, 10.0), &VIEW, start, end), 1.0);
    }
}
