use crate::anim::{Ease, QuickTo, Settling};
use crate::config::{MAGNETIC_DAMPING, MAGNETIC_PROXIMITY_PX};
use crate::geometry::Rect;

const SETTLE_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticOffset {
    pub dx: f64,
    pub dy: f64,
}

impl MagneticOffset {
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.dx, self.dy)
    }
}

/// Pulls a control towards a nearby pointer and springs it home when the pointer
/// moves away.
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticControl {
    x: QuickTo,
    y: QuickTo,
    engaged: bool,
}

impl Default for MagneticControl {
    fn default() -> Self {
        Self {
            x: QuickTo::new(0.0, SETTLE_MS, Ease::MAGNETIC),
            y: QuickTo::new(0.0, SETTLE_MS, Ease::MAGNETIC),
            engaged: false,
        }
    }
}

impl MagneticControl {
    /// `bounds` must be freshly measured for this sample.
    pub fn track(&mut self, pointer_x: f64, pointer_y: f64, bounds: Rect) {
        if bounds.contains_within(pointer_x, pointer_y, MAGNETIC_PROXIMITY_PX) {
            let (cx, cy) = bounds.center();
            self.engaged = true;
            self.x.set_target((pointer_x - cx) * MAGNETIC_DAMPING);
            self.y.set_target((pointer_y - cy) * MAGNETIC_DAMPING);
        } else if self.engaged {
            self.release();
        }
    }

    pub fn release(&mut self) {
        self.engaged = false;
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn offset(&self) -> MagneticOffset {
        MagneticOffset { dx: self.x.value(), dy: self.y.value() }
    }
}

impl Settling for MagneticControl {
    fn advance(&mut self, dt_ms: f64) {
        self.x.advance(dt_ms);
        self.y.advance(dt_ms);
    }

    fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
