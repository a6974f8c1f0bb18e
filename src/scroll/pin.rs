use crate::anim::Ease;
use crate::config::{DESKTOP_MIN_WIDTH, SNAP_MAX_MS, SNAP_MIN_MS};

/// Horizontal track of panels that scrolls sideways while its section is pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinTrack {
    panels: usize,
}

/// Where the pinned progress should glide to once scrolling stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    pub target: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl PinTrack {
    /// Only wide viewports with at least two panels get a pinned track; everything
    /// else stacks the panels vertically.
    pub fn for_viewport(width: f64, panels: usize) -> Option<Self> {
        (width >= DESKTOP_MIN_WIDTH && panels > 1).then_some(Self { panels })
    }

    pub fn panels(&self) -> usize {
        self.panels
    }

    fn steps(&self) -> f64 {
        (self.panels - 1) as f64
    }

    /// Scroll needed to bring the last panel into view. `panel_width` must be read
    /// from the row layout, after the section is marked pinned.
    pub fn scroll_distance(&self, panel_width: f64) -> f64 {
        panel_width.max(0.0) * self.steps()
    }

    /// Horizontal offset of the track, in percent of one panel width.
    pub fn offset_percent(&self, progress: f64) -> f64 {
        -100.0 * self.steps() * progress.clamp(0.0, 1.0)
    }

    pub fn snap(&self, progress: f64) -> f64 {
        (progress.clamp(0.0, 1.0) * self.steps()).round() / self.steps()
    }

    pub fn panel_at(&self, progress: f64) -> usize {
        (self.snap(progress) * self.steps()).round() as usize
    }

    /// `None` when already resting on a panel. The glide takes longer the further
    /// it has to travel, within the snap bounds.
    pub fn settle(&self, progress: f64) -> Option<Settle> {
        let target = self.snap(progress);
        let distance = (target - progress.clamp(0.0, 1.0)).abs();
        if distance < 1e-6 {
            return None;
        }
        let share = (distance * self.steps() * 2.0).min(1.0);
        Some(Settle {
            target,
            duration_ms: SNAP_MIN_MS + (SNAP_MAX_MS - SNAP_MIN_MS) * share,
            ease: Ease::Power1InOut,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_stack_instead_of_pinning() {
        assert!(PinTrack::for_viewport(1023.0, 4).is_none());
        assert!(PinTrack::for_viewport(1440.0, 1).is_none());
        assert_eq!(PinTrack::for_viewport(1024.0, 4).map(|t| t.panels()), Some(4));
    }

    #[test]
    fn offset_follows_progress_linearly_and_clamps() {
        let track = PinTrack { panels: 4 };
        for progress in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert!((track.offset_percent(progress) - -300.0 * progress).abs() < 1e-9);
        }
        assert_eq!(track.offset_percent(-0.4), 0.0);
        assert_eq!(track.offset_percent(1.7), -300.0);
    }

    #[test]
    fn scroll_distance_spans_every_panel_but_the_first() {
        assert_eq!(PinTrack { panels: 4 }.scroll_distance(1440.0), 4320.0);
        assert_eq!(PinTrack { panels: 2 }.scroll_distance(1024.0), 1024.0);
        assert_eq!(PinTrack { panels: 4 }.scroll_distance(-10.0), 0.0);
    }

    #[test]
    fn every_rest_position_shows_one_whole_panel() {
        let track = PinTrack { panels: 4 };
        let rest = [0.0, -100.0, -200.0, -300.0];
        for step in 0..=100 {
            let progress = step as f64 / 100.0;
            let offset = track.offset_percent(track.snap(progress));
            assert!(
                rest.iter().any(|r| (r - offset).abs() < 1e-9),
                "offset {} at progress {}",
                offset,
                progress
            );
        }
    }

    #[test]
    fn settle_heads_for_the_nearest_panel() {
        let track = PinTrack { panels: 4 };
        let settle = track.settle(0.40).unwrap();
        assert!((settle.target - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(settle.ease, Ease::Power1InOut);
        assert_eq!(track.panel_at(0.40), 1);
        assert_eq!(track.panel_at(0.9), 3);
        assert!(track.settle(2.0 / 3.0).is_none());
    }

    #[test]
    fn settle_duration_stays_within_bounds() {
        let track = PinTrack { panels: 4 };
        for step in 0..=200 {
            if let Some(settle) = track.settle(step as f64 / 200.0) {
                assert!(settle.duration_ms >= SNAP_MIN_MS);
                assert!(settle.duration_ms <= SNAP_MAX_MS);
            }
        }
    }
}
