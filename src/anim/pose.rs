use web_sys::HtmlElement;

use super::easing::Ease;
use super::tween::Tween;

/// The visual state an animated element can be in. Only transform and opacity are
/// animated so every frame stays on the compositor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub rotate_z: f64,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        x: 0.0,
        y: 0.0,
        x_percent: 0.0,
        y_percent: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
        rotate_z: 0.0,
        opacity: 1.0,
    };

    pub fn hidden() -> Self {
        Pose { opacity: 0.0, ..Pose::IDENTITY }
    }

    pub fn x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub fn y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub fn x_percent(self, x_percent: f64) -> Self {
        Pose { x_percent, ..self }
    }

    pub fn y_percent(self, y_percent: f64) -> Self {
        Pose { y_percent, ..self }
    }

    pub fn scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub fn rotate_x(self, rotate_x: f64) -> Self {
        Pose { rotate_x, ..self }
    }

    pub fn rotate_z(self, rotate_z: f64) -> Self {
        Pose { rotate_z, ..self }
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            x_percent: mix(self.x_percent, to.x_percent),
            y_percent: mix(self.y_percent, to.y_percent),
            scale: mix(self.scale, to.scale),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_z: mix(self.rotate_z, to.rotate_z),
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}%, {}%) translate3d({}px, {}px, 0) rotateX({}deg) rotate({}deg) scale({})",
            self.x_percent, self.y_percent, self.x, self.y, self.rotate_x, self.rotate_z, self.scale
        )
    }

    /// Inline style for first paint, before any script has touched the element.
    pub fn css(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform(), self.opacity)
    }

    pub fn apply(&self, element: &HtmlElement) {
        let style = element.style();
        let _ = style.set_property("transform", &self.transform());
        let _ = style.set_property("opacity", &self.opacity.to_string());
    }
}

/// A from → to motion shared by a list of elements, offset by a fixed stagger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
}

impl Reveal {
    pub fn new(from: Pose, duration_ms: f64, ease: Ease) -> Self {
        Reveal {
            from,
            to: Pose::IDENTITY,
            duration_ms,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease,
        }
    }

    pub fn to(self, to: Pose) -> Self {
        Reveal { to, ..self }
    }

    pub fn stagger(self, stagger_ms: f64) -> Self {
        Reveal { stagger_ms, ..self }
    }

    pub fn delay(self, delay_ms: f64) -> Self {
        Reveal { delay_ms, ..self }
    }

    pub fn tween_for(&self, index: usize) -> Tween {
        Tween::new(self.duration_ms, self.ease).delayed(self.delay_ms + self.stagger_ms * index as f64)
    }

    /// Time until the last of `count` staggered elements has finished.
    pub fn span_ms(&self, count: usize) -> f64 {
        let last = count.saturating_sub(1) as f64;
        self.delay_ms + self.stagger_ms * last + self.duration_ms
    }

    pub fn pose_at(&self, progress: f64) -> Pose {
        self.from.lerp(&self.to, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_reaches_both_ends() {
        let from = Pose::hidden().y(80.0).rotate_x(15.0);
        assert_eq!(from.lerp(&Pose::IDENTITY, 0.0), from);
        assert_eq!(from.lerp(&Pose::IDENTITY, 1.0), Pose::IDENTITY);
    }

    #[test]
    fn overshoot_never_pushes_opacity_out_of_range() {
        let from = Pose::hidden();
        let pose = from.lerp(&Pose::IDENTITY, 1.3);
        assert_eq!(pose.opacity, 1.0);
    }

    #[test]
    fn stagger_offsets_each_element() {
        let reveal = Reveal::new(Pose::hidden(), 1200.0, Ease::Power3Out).stagger(200.0);
        let mut third = reveal.tween_for(2);
        third.advance(399.0);
        assert_eq!(third.progress(), 0.0);
        assert_eq!(reveal.span_ms(3), 1600.0);
        assert_eq!(reveal.span_ms(0), 1200.0);
    }

    #[test]
    fn css_lists_every_channel() {
        let css = Pose::IDENTITY.y(30.0).css();
        assert!(css.contains("translate3d(0px, 30px, 0)"));
        assert!(css.contains("opacity: 1;"));
    }
}
