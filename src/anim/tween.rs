use super::easing::Ease;

/// Time-based progress from 0 to 1 with an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    duration_ms: f64,
    delay_ms: f64,
    ease: Ease,
    elapsed_ms: f64,
}

impl Tween {
    pub fn new(duration_ms: f64, ease: Ease) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            ease,
            elapsed_ms: 0.0,
        }
    }

    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.total_ms());
    }

    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
    }

    pub fn finish(&mut self) {
        self.elapsed_ms = self.total_ms();
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.total_ms()
    }

    /// Eased progress in `[0, 1]` (elastic curves may briefly exceed 1).
    pub fn progress(&self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        let local = self.elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return 0.0;
        }
        self.ease.apply(local / self.duration_ms)
    }
}

/// A value that glides towards whatever target it was last given. Every retarget
/// starts a fresh tween from the current value, so rapid pointer samples chain
/// smoothly instead of queueing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickTo {
    value: f64,
    from: f64,
    target: f64,
    tween: Tween,
}

impl QuickTo {
    pub fn new(value: f64, duration_ms: f64, ease: Ease) -> Self {
        let mut tween = Tween::new(duration_ms, ease);
        tween.finish();
        Self { value, from: value, target: value, tween }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target == self.target && self.is_settled() {
            return;
        }
        self.from = self.value;
        self.target = target;
        self.tween.restart();
    }

    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        self.tween.advance(dt_ms);
        self.value = if self.tween.is_finished() {
            self.target
        } else {
            self.from + (self.target - self.from) * self.tween.progress()
        };
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.tween.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_holds_progress_at_zero() {
        let mut tween = Tween::new(400.0, Ease::Linear).delayed(100.0);
        tween.advance(80.0);
        assert_eq!(tween.progress(), 0.0);
        tween.advance(220.0);
        assert!((tween.progress() - 0.5).abs() < 1e-9);
        tween.advance(1000.0);
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = Tween::new(0.0, Ease::Power2In);
        tween.advance(0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn quick_to_retargets_from_the_current_value() {
        let mut x = QuickTo::new(0.0, 100.0, Ease::Linear);
        x.set_target(100.0);
        x.advance(50.0);
        assert!((x.value() - 50.0).abs() < 1e-9);

        x.set_target(0.0);
        x.advance(50.0);
        assert!((x.value() - 25.0).abs() < 1e-9);
        x.advance(50.0);
        assert_eq!(x.value(), 0.0);
        assert!(x.is_settled());
    }

    #[test]
    fn quick_to_lands_exactly_on_target_despite_overshooting_curve() {
        let mut x = QuickTo::new(0.0, 1000.0, Ease::MAGNETIC);
        x.set_target(37.3);
        for _ in 0..100 {
            x.advance(16.0);
        }
        assert_eq!(x.value(), 37.3);
    }
}
