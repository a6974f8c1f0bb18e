use yew::prelude::*;
use web_sys::HtmlElement;

use crate::anim::{AnimationGroup, Chase};
use crate::config::{CURSOR_MIN_WIDTH, FINE_POINTER_QUERY, INTERACTIVE_SELECTOR};
use crate::error::DomError;
use crate::geometry::Viewport;
use crate::interaction::cursor::CursorFollower;
use crate::interaction::hover::HoverRegistry;
use crate::interaction::pointer::{PointerKind, PointerTracker};

/// Fine pointer and a wide enough screen; decided once at mount.
fn cursor_supported() -> Result<bool, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let fine = window
        .match_media(FINE_POINTER_QUERY)?
        .map(|query| query.matches())
        .unwrap_or(false);
    Ok(fine && Viewport::current()?.width >= CURSOR_MIN_WIDTH)
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let enabled = use_state(|| cursor_supported().unwrap_or(false));
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();
    let tracker = use_context::<PointerTracker>();
    let registry = use_context::<HoverRegistry>();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with_deps(
            move |enabled| {
                let mut bound = None;
                let layers = dot_ref.cast::<HtmlElement>().zip(ring_ref.cast::<HtmlElement>());
                if let (true, Some((dot, ring))) = (*enabled, layers) {
                    let group = AnimationGroup::new();
                    let chase = Chase::new(CursorFollower::default(), group.animator(), move |cursor: &CursorFollower| {
                        let _ = dot.style().set_property("transform", &cursor.dot().transform());
                        let _ = ring.style().set_property("transform", &cursor.ring().transform());
                        let _ = ring.class_list().toggle_with_force("is-hovering", cursor.is_hovered());
                    });

                    let subscription = tracker.map(|tracker| {
                        let chase = chase.clone();
                        tracker.subscribe(move |motion| {
                            if motion.kind == PointerKind::Mouse {
                                chase.update(|cursor| cursor.retarget(&motion.sample));
                            }
                        })
                    });
                    let (observer, seeds) = match registry {
                        Some(registry) => {
                            let chase = chase.clone();
                            let observer = registry.observe(Callback::from(move |hovered: bool| {
                                chase.update(|cursor| cursor.set_hovered(hovered));
                            }));
                            let seeds = registry.register_matching(INTERACTIVE_SELECTOR);
                            log::debug!("Cursor tracking {} interactive elements", registry.len());
                            (Some(observer), seeds)
                        }
                        None => (None, Vec::new()),
                    };
                    bound = Some((subscription, observer, seeds, group));
                }
                move || drop(bound)
            },
            *enabled,
        );
    }

    if !*enabled {
        return html! {};
    }

    html! {
        <>
            <div ref={dot_ref} class="cursor-dot" aria-hidden="true"></div>
            <div ref={ring_ref} class="cursor-ring" aria-hidden="true"></div>
        </>
    }
}
