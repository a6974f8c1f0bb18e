use crate::anim::{Ease, Tween};
use crate::config::COUNTER_DURATION_MS;

/// Figure that counts up from zero to its target once its section enters view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    target: u32,
    tween: Tween,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self { target, tween: Tween::new(COUNTER_DURATION_MS, Ease::ExpoOut) }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.tween.advance(dt_ms);
        self.value()
    }

    /// Whole numbers only, never above the target.
    pub fn value(&self) -> u32 {
        if self.tween.is_finished() {
            return self.target;
        }
        let value = (self.target as f64 * self.tween.progress()).round();
        (value.max(0.0) as u32).min(self.target)
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }

    pub fn tween(&self) -> Tween {
        self.tween
    }
}
