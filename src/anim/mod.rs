//! Frame-driven animation runtime: easing curves, tweens, poses, timelines and the
//! `AnimationGroup` that scopes every running animation to its component.

pub mod chase;
pub mod easing;
pub mod group;
pub mod pose;
pub mod timeline;
pub mod tween;

pub use chase::{Chase, Settling};
pub use easing::Ease;
pub use group::{AnimationGroup, Animator, Flow};
pub use pose::{Pose, Reveal};
pub use timeline::{Position, Timeline};
pub use tween::{QuickTo, Tween};

use web_sys::HtmlElement;

/// Puts `elements` in the reveal's start pose right away and plays them to its end
/// pose, staggered in document order.
pub fn play_reveal(animator: &Animator, elements: &[HtmlElement], reveal: Reveal) {
    for (index, element) in elements.iter().enumerate() {
        reveal.from.apply(element);
        let element = element.clone();
        animator.tween(reveal.tween_for(index), move |p| reveal.pose_at(p).apply(&element));
    }
}

/// Applies the start pose only, for elements that wait for a scroll trigger.
pub fn prime(elements: &[HtmlElement], pose: Pose) {
    for element in elements {
        pose.apply(element);
    }
}
