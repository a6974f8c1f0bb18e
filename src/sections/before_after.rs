use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::HtmlElement;

use crate::anim::{Ease, Pose, Reveal};
use crate::content::SiteContent;
use crate::geometry::Measure;
use crate::interaction::comparator::{DragAction, DragComparator};
use crate::interaction::hover::use_hover_target;
use crate::interaction::pointer::{PointerMotion, PointerPhase, PointerSubscription, PointerTracker};
use crate::scroll::{use_choreography, ScrollEnd, Signal, TriggerPoint};

/// Scrubbed with the scroll instead of fired once, so scrolling back hides it again.
fn entrance() -> Reveal {
    Reveal::new(Pose::hidden().y(100.0).scale(0.95), 1500.0, Ease::Power3Out)
}

/// A press inside `frame` starts a drag. Moves anywhere on the page follow it
/// and the next release ends it, even outside the frame.
pub fn follow_drag(
    tracker: &PointerTracker,
    frame: impl Measure + 'static,
    dispatch: impl Fn(DragAction) + 'static,
) -> PointerSubscription {
    let dragging = Cell::new(false);
    tracker.subscribe(move |motion| {
        let PointerMotion { sample, phase, .. } = *motion;
        match phase {
            PointerPhase::Press => match frame.measure() {
                Ok(bounds) if bounds.contains_within(sample.x, sample.y, 0.0) => {
                    dragging.set(true);
                    dispatch(DragAction::Begin { pointer_x: sample.x, bounds: Some(bounds) });
                }
                Ok(_) => {}
                Err(err) => log::debug!("Comparator press without bounds: {}", err),
            },
            PointerPhase::Move if dragging.get() => dispatch(DragAction::Update {
                pointer_x: sample.x,
                bounds: frame.measure().ok(),
            }),
            PointerPhase::Move => {}
            PointerPhase::Release => {
                if dragging.replace(false) {
                    dispatch(DragAction::End);
                }
            }
        }
    })
}

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let tracker = use_context::<PointerTracker>();
    let comparator = use_reducer(DragComparator::default);
    let container = use_node_ref();
    use_hover_target(container.clone());

    {
        let container = container.clone();
        use_choreography(move |scene, _| {
            let Some(frame) = container.cast::<HtmlElement>() else {
                return;
            };
            let reveal = entrance();
            reveal.from.apply(&frame);
            scene.scrub(
                "comparator entrance",
                container.clone(),
                TriggerPoint::top_at(0.85),
                ScrollEnd::At(TriggerPoint::top_at(0.45)),
                move |signal| {
                    if let Signal::Progress(p) = signal {
                        reveal.pose_at(reveal.ease.apply(p)).apply(&frame);
                    }
                },
            );
        });
    }

    {
        let container = container.clone();
        let dispatcher = comparator.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = tracker.map(|tracker| {
                    follow_drag(&tracker, container, move |action| dispatcher.dispatch(action))
                });
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <section class="before-after">
            <div class="section-heading">
                <p class="eyebrow">{"Métamorphose"}</p>
                <h2>{"L'art de la transformation."}</h2>
                <p class="lead">{"Découvrez comment nous métamorphosons les espaces bruts en lieux de vie exceptionnels."}</p>
            </div>
            <div
                ref={container}
                class={classes!("comparator", comparator.is_dragging().then(|| "dragging"))}
            >
                <div class="comparator-layer">
                    <img src={content.comparison.after.clone()} alt="Jardin aménagé - Après" draggable="false" />
                    <span class="badge badge-after">{"Après"}</span>
                </div>
                <div class="comparator-layer before" style={comparator.clip_path()}>
                    <img src={content.comparison.before.clone()} alt="Terrain brut - Avant" draggable="false" />
                    <span class="badge badge-before">{"Avant"}</span>
                </div>
                <div class="comparator-handle" style={comparator.handle_style()}>
                    <div class="handle-knob">{"⇆"}</div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::error::DomError;
    use crate::geometry::Rect;
    use crate::interaction::pointer::{PointerKind, PointerSample};

    const FRAME: Rect = Rect::new(100.0, 0.0, 400.0, 300.0);

    struct Frame;

    impl Measure for Frame {
        fn measure(&self) -> Result<Rect, DomError> {
            Ok(FRAME)
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<DragAction>>>, impl Fn(DragAction) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |action| sink.borrow_mut().push(action))
    }

    fn send(tracker: &PointerTracker, x: f64, y: f64, phase: PointerPhase) {
        tracker.record(PointerSample { x, y, timestamp_ms: 0 }, PointerKind::Mouse, phase);
    }

    #[test]
    fn release_outside_the_frame_still_ends_the_drag() {
        let tracker = PointerTracker::new();
        let (log, dispatch) = recorder();
        let _subscription = follow_drag(&tracker, Frame, dispatch);

        send(&tracker, 300.0, 150.0, PointerPhase::Press);
        send(&tracker, -200.0, 900.0, PointerPhase::Move);
        send(&tracker, -200.0, 900.0, PointerPhase::Release);

        assert_eq!(
            *log.borrow(),
            vec![
                DragAction::Begin { pointer_x: 300.0, bounds: Some(FRAME) },
                DragAction::Update { pointer_x: -200.0, bounds: Some(FRAME) },
                DragAction::End,
            ]
        );

        let mut slider = DragComparator::default();
        for action in log.borrow().iter() {
            match *action {
                DragAction::Begin { pointer_x, bounds } => slider.begin_drag(pointer_x, bounds),
                DragAction::Update { pointer_x, bounds } => slider.update_drag(pointer_x, bounds),
                DragAction::End => slider.end_drag(),
            }
        }
        assert!(!slider.is_dragging());
        assert_eq!(slider.position_percent(), 0.0);
    }

    #[test]
    fn presses_outside_the_frame_are_ignored() {
        let tracker = PointerTracker::new();
        let (log, dispatch) = recorder();
        let _subscription = follow_drag(&tracker, Frame, dispatch);

        send(&tracker, 50.0, 150.0, PointerPhase::Press);
        send(&tracker, 300.0, 150.0, PointerPhase::Move);
        send(&tracker, 300.0, 150.0, PointerPhase::Release);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn dropping_the_subscription_stops_the_drag_updates() {
        let tracker = PointerTracker::new();
        let (log, dispatch) = recorder();
        let subscription = follow_drag(&tracker, Frame, dispatch);

        send(&tracker, 300.0, 150.0, PointerPhase::Press);
        drop(subscription);
        send(&tracker, 450.0, 150.0, PointerPhase::Move);
        send(&tracker, 450.0, 150.0, PointerPhase::Release);

        assert_eq!(*log.borrow(), vec![DragAction::Begin { pointer_x: 300.0, bounds: Some(FRAME) }]);
        assert_eq!(tracker.subscriber_count(), 0);
    }

    #[test]
    fn entrance_scrub_lands_on_the_resting_pose() {
        let reveal = entrance();
        assert_eq!(reveal.pose_at(reveal.ease.apply(1.0)), Pose::IDENTITY);
        assert_eq!(reveal.pose_at(reveal.ease.apply(0.0)).y, 100.0);
    }
}
