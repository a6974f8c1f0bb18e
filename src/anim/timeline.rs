use super::pose::Reveal;

/// Where a timeline entry starts relative to the end of the entry before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    AfterPrevious,
    /// Starts this many milliseconds before the previous entry ends.
    Overlap(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub selector: &'static str,
    pub reveal: Reveal,
}

/// A sequence of staggered reveals laid out on one clock. Each entry is resolved
/// into an absolute delay so it can be played as independent tweens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    cues: Vec<Cue>,
    end_ms: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reveal over `count` elements matched by `selector`.
    pub fn add(mut self, selector: &'static str, reveal: Reveal, count: usize, position: Position) -> Self {
        let start = match position {
            Position::AfterPrevious => self.end_ms,
            Position::Overlap(ms) => (self.end_ms - ms).max(0.0),
        };
        let reveal = reveal.delay(start + reveal.delay_ms);
        self.end_ms = self.end_ms.max(reveal.span_ms(count));
        self.cues.push(Cue { selector, reveal });
        self
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn duration_ms(&self) -> f64 {
        self.end_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::easing::Ease;
    use crate::anim::pose::Pose;

    #[test]
    fn overlaps_pull_entries_back_onto_the_previous_one() {
        let lines = Reveal::new(Pose::hidden().y(120.0), 1500.0, Ease::Power4Out)
            .stagger(150.0)
            .delay(300.0);
        let subtitle = Reveal::new(Pose::hidden().y(40.0), 1200.0, Ease::Power3Out);
        let buttons = Reveal::new(Pose::hidden().y(30.0), 1000.0, Ease::Power3Out).stagger(150.0);

        let timeline = Timeline::new()
            .add(".lines", lines, 2, Position::AfterPrevious)
            .add(".subtitle", subtitle, 1, Position::Overlap(1000.0))
            .add(".buttons", buttons, 2, Position::Overlap(800.0));

        let delays: Vec<f64> = timeline.cues().iter().map(|c| c.reveal.delay_ms).collect();
        assert_eq!(delays, vec![300.0, 950.0, 1350.0]);
        assert_eq!(timeline.duration_ms(), 2500.0);
    }

    #[test]
    fn overlap_never_starts_before_zero() {
        let reveal = Reveal::new(Pose::hidden(), 200.0, Ease::Linear);
        let timeline = Timeline::new()
            .add("a", reveal, 1, Position::AfterPrevious)
            .add("b", reveal, 1, Position::Overlap(5000.0));
        assert_eq!(timeline.cues()[1].reveal.delay_ms, 0.0);
    }
}
