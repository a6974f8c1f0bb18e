use std::f64::consts::PI;

/// Easing curves used across the site. Every curve maps 0 to 0 and 1 to exactly 1,
/// so a finished animation always lands on its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// Quadratic deceleration; the default for plain property tweens.
    Power1Out,
    Power1InOut,
    /// Cubic acceleration.
    Power2In,
    Power2Out,
    /// Quartic deceleration.
    Power3Out,
    /// Quintic deceleration.
    Power4Out,
    ExpoOut,
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// The springy overshoot used by magnetic buttons.
    pub const MAGNETIC: Ease = Ease::ElasticOut { amplitude: 1.0, period: 0.3 };

    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power1Out => ease_out(t, 2),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2In => t.powi(3),
            Ease::Power2Out => ease_out(t, 3),
            Ease::Power3Out => ease_out(t, 4),
            Ease::Power4Out => ease_out(t, 5),
            Ease::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
            Ease::ElasticOut { amplitude, period } => {
                let amplitude = amplitude.max(1.0);
                let phase = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f64.powf(-10.0 * t) * ((t - phase) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 9] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::ExpoOut,
        Ease::MAGNETIC,
    ];

    #[test]
    fn every_curve_pins_its_endpoints() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
            assert_eq!(ease.apply(1.7), 1.0, "{:?}", ease);
            assert_eq!(ease.apply(-0.2), 0.0, "{:?}", ease);
        }
    }

    #[test]
    fn expo_out_decelerates_and_never_overshoots() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = Ease::ExpoOut.apply(i as f64 / 100.0);
            assert!(v >= last);
            assert!(v <= 1.0);
            last = v;
        }
        assert!(Ease::ExpoOut.apply(0.5) > 0.95);
    }

    #[test]
    fn elastic_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Ease::MAGNETIC.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn in_out_is_symmetric_around_the_midpoint() {
        let a = Ease::Power1InOut.apply(0.25);
        let b = Ease::Power1InOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
