use std::rc::Rc;

use yew::Reducible;

use crate::geometry::Rect;

pub const INITIAL_POSITION: f64 = 50.0;

/// Before/after slider. The "before" layer is clipped to `[0, position]` percent of
/// the container width and the handle sits at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragComparator {
    position_percent: f64,
    dragging: bool,
}

impl Default for DragComparator {
    fn default() -> Self {
        Self { position_percent: INITIAL_POSITION, dragging: false }
    }
}

impl DragComparator {
    pub fn position_percent(&self) -> f64 {
        self.position_percent
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self, pointer_x: f64, bounds: Option<Rect>) {
        self.dragging = true;
        self.reposition(pointer_x, bounds);
    }

    pub fn update_drag(&mut self, pointer_x: f64, bounds: Option<Rect>) {
        if self.dragging {
            self.reposition(pointer_x, bounds);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    fn reposition(&mut self, pointer_x: f64, bounds: Option<Rect>) {
        if let Some(percent) = bounds.and_then(|rect| position_in(pointer_x, &rect)) {
            self.position_percent = percent;
        }
    }

    pub fn clip_path(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", 100.0 - self.position_percent)
    }

    pub fn handle_style(&self) -> String {
        format!("left: {}%;", self.position_percent)
    }
}

/// Pixel offset is bounded to the container before dividing, so the result is
/// always inside `[0, 100]` even for pointers far outside the element.
pub fn position_in(pointer_x: f64, rect: &Rect) -> Option<f64> {
    if !(rect.width > 0.0) || !pointer_x.is_finite() {
        return None;
    }
    let x = (pointer_x - rect.left).clamp(0.0, rect.width);
    Some((x / rect.width * 100.0).clamp(0.0, 100.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    Begin { pointer_x: f64, bounds: Option<Rect> },
    Update { pointer_x: f64, bounds: Option<Rect> },
    End,
}

impl Reducible for DragComparator {
    type Action = DragAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            DragAction::Begin { pointer_x, bounds } => next.begin_drag(pointer_x, bounds),
            DragAction::Update { pointer_x, bounds } => next.update_drag(pointer_x, bounds),
            DragAction::End => next.end_drag(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect::new(100.0, 0.0, 400.0, 300.0);

    #[test]
    fn pointer_outside_the_box_clamps_to_the_edges() {
        let mut slider = DragComparator::default();
        slider.begin_drag(300.0, Some(BOX));
        assert_eq!(slider.position_percent(), 50.0);

        slider.update_drag(-5_000.0, Some(BOX));
        assert_eq!(slider.position_percent(), 0.0);

        slider.update_drag(99_999.0, Some(BOX));
        assert_eq!(slider.position_percent(), 100.0);

        slider.update_drag(f64::MAX, Some(BOX));
        assert_eq!(slider.position_percent(), 100.0);
    }

    #[test]
    fn end_without_begin_is_harmless() {
        let mut slider = DragComparator::default();
        slider.end_drag();
        assert_eq!(slider.position_percent(), INITIAL_POSITION);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn updates_outside_a_drag_are_ignored() {
        let mut slider = DragComparator::default();
        slider.update_drag(120.0, Some(BOX));
        assert_eq!(slider.position_percent(), INITIAL_POSITION);

        slider.begin_drag(200.0, Some(BOX));
        slider.end_drag();
        slider.update_drag(480.0, Some(BOX));
        assert_eq!(slider.position_percent(), 25.0);
    }

    #[test]
    fn missing_or_collapsed_bounds_keep_the_position() {
        let mut slider = DragComparator::default();
        slider.begin_drag(10.0, None);
        assert!(slider.is_dragging());
        assert_eq!(slider.position_percent(), INITIAL_POSITION);

        slider.update_drag(10.0, Some(Rect::new(0.0, 0.0, 0.0, 100.0)));
        assert_eq!(slider.position_percent(), INITIAL_POSITION);
    }

    #[test]
    fn reducer_only_reallocates_on_change() {
        let slider = Rc::new(DragComparator::default());
        let same = slider.clone().reduce(DragAction::End);
        assert!(Rc::ptr_eq(&slider, &same));

        let moved = slider.reduce(DragAction::Begin { pointer_x: 500.0, bounds: Some(BOX) });
        assert_eq!(moved.position_percent(), 100.0);
        assert!(moved.is_dragging());
    }

    #[test]
    fn clip_and_handle_track_the_position() {
        let mut slider = DragComparator::default();
        slider.begin_drag(200.0, Some(BOX));
        assert_eq!(slider.clip_path(), "clip-path: inset(0 75% 0 0);");
        assert_eq!(slider.handle_style(), "left: 25%;");
    }
}
