use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element};
use yew::NodeRef;

use crate::error::DomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// Client-space rectangle, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Center => self.top + self.height / 2.0,
            Edge::Bottom => self.bottom(),
        }
    }

    /// Whether `(x, y)` lies inside the rect grown by `margin` on every side.
    pub fn contains_within(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= self.left - margin
            && x <= self.right() + margin
            && y >= self.top - margin
            && y <= self.bottom() + margin
    }
}

impl From<DomRect> for Rect {
    fn from(rect: DomRect) -> Self {
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn current() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Viewport { width, height })
    }
}

/// Anything whose on-screen box can be read on demand. Rects are read fresh on
/// every call and never cached across layout changes.
pub trait Measure {
    fn measure(&self) -> Result<Rect, DomError>;
}

impl Measure for Element {
    fn measure(&self) -> Result<Rect, DomError> {
        Ok(self.get_bounding_client_rect().into())
    }
}

impl Measure for web_sys::HtmlElement {
    fn measure(&self) -> Result<Rect, DomError> {
        Ok(self.get_bounding_client_rect().into())
    }
}

impl Measure for NodeRef {
    fn measure(&self) -> Result<Rect, DomError> {
        self.cast::<Element>()
            .map(|el| el.get_bounding_client_rect().into())
            .ok_or(DomError::Unmounted("node ref"))
    }
}

pub fn query_all(root: &Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

pub fn query_all_in(root: &NodeRef, selector: &str) -> Vec<web_sys::HtmlElement> {
    root.cast::<Element>()
        .map(|el| query_all(&el, selector))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_the_box() {
        let rect = Rect::new(10.0, 100.0, 200.0, 50.0);
        assert_eq!(rect.edge(Edge::Top), 100.0);
        assert_eq!(rect.edge(Edge::Center), 125.0);
        assert_eq!(rect.edge(Edge::Bottom), 150.0);
        assert_eq!(rect.center(), (110.0, 125.0));
    }

    #[test]
    fn proximity_margin_extends_the_hit_area() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert!(!rect.contains_within(110.0, 20.0, 0.0));
        assert!(rect.contains_within(110.0, 20.0, 12.0));
        assert!(!rect.contains_within(50.0, -20.0, 12.0));
    }
}
