use crate::anim::{Ease, QuickTo, Settling};

use super::pointer::PointerSample;

const DOT_FOLLOW_MS: f64 = 100.0;
const RING_FOLLOW_MS: f64 = 300.0;
const DOT_SCALE_MS: f64 = 200.0;
const RING_SCALE_MS: f64 = 300.0;
const RING_HOVER_SCALE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFrame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl LayerFrame {
    /// Centres the layer on its point.
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) translate(-50%, -50%) scale({})",
            self.x, self.y, self.scale
        )
    }
}

/// Two-layer cursor: a dot that tracks the pointer tightly and a ring that lags
/// behind it. Hovering an interactive element collapses the dot and blows up the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    dot: [QuickTo; 2],
    ring: [QuickTo; 2],
    dot_scale: QuickTo,
    ring_scale: QuickTo,
    hovered: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        let follow = |ms| [QuickTo::new(0.0, ms, Ease::Power3Out), QuickTo::new(0.0, ms, Ease::Power3Out)];
        Self {
            dot: follow(DOT_FOLLOW_MS),
            ring: follow(RING_FOLLOW_MS),
            dot_scale: QuickTo::new(1.0, DOT_SCALE_MS, Ease::Power1Out),
            ring_scale: QuickTo::new(1.0, RING_SCALE_MS, Ease::Power1Out),
            hovered: false,
        }
    }
}

impl CursorFollower {
    pub fn retarget(&mut self, sample: &PointerSample) {
        for layer in [&mut self.dot, &mut self.ring] {
            layer[0].set_target(sample.x);
            layer[1].set_target(sample.y);
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.dot_scale.set_target(if hovered { 0.0 } else { 1.0 });
        self.ring_scale.set_target(if hovered { RING_HOVER_SCALE } else { 1.0 });
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn dot(&self) -> LayerFrame {
        LayerFrame { x: self.dot[0].value(), y: self.dot[1].value(), scale: self.dot_scale.value() }
    }

    pub fn ring(&self) -> LayerFrame {
        LayerFrame { x: self.ring[0].value(), y: self.ring[1].value(), scale: self.ring_scale.value() }
    }

    fn channels(&mut self) -> [&mut QuickTo; 6] {
        let [dx, dy] = &mut self.dot;
        let [rx, ry] = &mut self.ring;
        [dx, dy, rx, ry, &mut self.dot_scale, &mut self.ring_scale]
    }
}

impl Settling for CursorFollower {
    fn advance(&mut self, dt_ms: f64) {
        for channel in self.channels() {
            channel.advance(dt_ms);
        }
    }

    fn is_settled(&self) -> bool {
        self.dot.iter().chain(self.ring.iter()).all(QuickTo::is_settled)
            && self.dot_scale.is_settled()
            && self.ring_scale.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> PointerSample {
        PointerSample { x, y, timestamp_ms: 0 }
    }

    #[test]
    fn ring_lags_behind_the_dot() {
        let mut cursor = CursorFollower::default();
        cursor.retarget(&at(300.0, 200.0));
        cursor.advance(50.0);
        assert!(cursor.dot().x > cursor.ring().x);
        assert!(cursor.dot().y > cursor.ring().y);

        cursor.advance(60.0);
        assert_eq!(cursor.dot().x, 300.0);
        assert!(cursor.ring().x < 300.0);
        assert!(!cursor.is_settled());

        cursor.advance(300.0);
        assert_eq!(cursor.ring().x, 300.0);
        assert!(cursor.is_settled());
    }

    #[test]
    fn hover_swaps_dot_for_an_enlarged_ring_and_back() {
        let mut cursor = CursorFollower::default();
        cursor.set_hovered(true);
        cursor.advance(400.0);
        assert_eq!(cursor.dot().scale, 0.0);
        assert_eq!(cursor.ring().scale, RING_HOVER_SCALE);

        cursor.set_hovered(false);
        cursor.advance(400.0);
        assert_eq!(cursor.dot().scale, 1.0);
        assert_eq!(cursor.ring().scale, 1.0);
        assert!(!cursor.is_hovered());
    }

    #[test]
    fn transform_centres_the_layer() {
        let frame = LayerFrame { x: 10.0, y: 20.0, scale: 1.5 };
        assert_eq!(frame.transform(), "translate3d(10px, 20px, 0) translate(-50%, -50%) scale(1.5)");
    }
}
