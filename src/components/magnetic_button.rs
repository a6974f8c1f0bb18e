use gloo_events::EventListener;
use yew::prelude::*;
use web_sys::HtmlElement;

use crate::anim::{AnimationGroup, Chase};
use crate::geometry::Measure;
use crate::interaction::hover::use_hover_target;
use crate::interaction::magnetic::MagneticControl;
use crate::interaction::pointer::{PointerKind, PointerTracker};

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Link that leans towards a nearby mouse pointer and springs back when it leaves.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let tracker = use_context::<PointerTracker>();
    use_hover_target(node.clone());

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let bound = tracker.zip(node.cast::<HtmlElement>()).map(|(tracker, button)| {
                    let group = AnimationGroup::new();
                    let target = button.clone();
                    let chase = Chase::new(MagneticControl::default(), group.animator(), move |control: &MagneticControl| {
                        let _ = target.style().set_property("transform", &control.offset().transform());
                    });
                    // Leaving the window from over the button sends no further mousemove
                    let leave = {
                        let chase = chase.clone();
                        EventListener::new(&button, "mouseleave", move |_| chase.update(MagneticControl::release))
                    };
                    let subscription = tracker.subscribe(move |motion| {
                        if motion.kind != PointerKind::Mouse {
                            return;
                        }
                        match button.measure() {
                            Ok(bounds) => chase.update(|control| control.track(motion.sample.x, motion.sample.y, bounds)),
                            Err(err) => log::debug!("Magnetic button not measurable: {}", err),
                        }
                    });
                    (subscription, leave, group)
                });
                move || drop(bound)
            },
            (),
        );
    }

    html! {
        <a ref={node} href={props.href.clone()} class={classes!("magnetic-button", "interactive-hover", props.class.clone())}>
            { props.children.clone() }
        </a>
    }
}
