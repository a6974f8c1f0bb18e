use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use yew::prelude::*;

use web_sys::HtmlElement;

use crate::anim::{self, AnimationGroup, Animator, Reveal};
use crate::error::DomError;
use crate::geometry::{Measure, Viewport};

use super::scene::{ScrollScene, Signal};
use super::trigger::TriggerPoint;

/// Feeds window scroll and resize events into a scene. Dropping the driver
/// detaches both listeners and releases the scene.
pub struct ScrollDriver {
    scene: Rc<RefCell<ScrollScene>>,
    _listeners: [EventListener; 2],
}

impl ScrollDriver {
    pub fn attach(scene: ScrollScene) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let scene = Rc::new(RefCell::new(scene));

        let on_scroll = {
            let scene = scene.clone();
            move |_: &Event| refresh(&scene)
        };
        let on_resize = {
            let scene = scene.clone();
            move |_: &Event| refresh(&scene)
        };
        let listeners = [
            EventListener::new(&window, "scroll", on_scroll),
            EventListener::new(&window, "resize", on_resize),
        ];

        // Sections already in view on load play straight away
        refresh(&scene);
        Ok(Self { scene, _listeners: listeners })
    }

    pub fn refresh(&self) {
        refresh(&self.scene);
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.release();
        }
    }
}

fn refresh(scene: &Rc<RefCell<ScrollScene>>) {
    let viewport = match Viewport::current() {
        Ok(viewport) => viewport,
        Err(err) => {
            log::debug!("Scroll refresh skipped: {}", err);
            return;
        }
    };
    // A reaction that scrolls the window re-enters here; the next event catches up
    if let Ok(mut scene) = scene.try_borrow_mut() {
        scene.refresh(&viewport);
    }
}

/// Holds `targets` in the reveal's start pose until `trigger` reaches `start`, then
/// plays the staggered reveal once.
pub fn reveal_on_enter(
    scene: &mut ScrollScene,
    animator: &Animator,
    label: &'static str,
    trigger: impl Measure + 'static,
    start: TriggerPoint,
    targets: Vec<HtmlElement>,
    reveal: Reveal,
) {
    if targets.is_empty() {
        log::debug!("No targets for {} reveal", label);
        return;
    }
    anim::prime(&targets, reveal.from);
    let animator = animator.clone();
    scene.once(label, trigger, start, move |signal| {
        if signal == Signal::Enter {
            anim::play_reveal(&animator, &targets, reveal);
        }
    });
}

/// Builds a section's scroll scene after mount and tears it down on unmount.
/// Animations started through the animator die with the section too.
#[hook]
pub fn use_choreography<F>(setup: F)
where
    F: FnOnce(&mut ScrollScene, &Animator) + 'static,
{
    use_choreography_with_deps((), move |_, scene, animator| setup(scene, animator));
}

/// Like [`use_choreography`], but rebuilds the whole scene whenever `deps` change.
#[hook]
pub fn use_choreography_with_deps<D, F>(deps: D, setup: F)
where
    D: PartialEq + 'static,
    F: FnOnce(&D, &mut ScrollScene, &Animator) + 'static,
{
    use_effect_with_deps(
        move |deps| {
            let group = AnimationGroup::new();
            let mut scene = ScrollScene::new();
            setup(deps, &mut scene, &group.animator());
            let driver = match ScrollDriver::attach(scene) {
                Ok(driver) => Some(driver),
                Err(err) => {
                    log::warn!("Scroll choreography not attached: {}", err);
                    None
                }
            };
            move || {
                drop(driver);
                drop(group);
            }
        },
        deps,
    );
}
