use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::HtmlElement;

use crate::anim::group::TrackId;
use crate::anim::{Animator, Chase, Ease, Pose, QuickTo, Tween};
use crate::config::{DESKTOP_MIN_WIDTH, PIN_SCRUB_LAG_MS, PIN_SETUP_DELAY_MS, SNAP_IDLE_MS};
use crate::content::SiteContent;
use crate::geometry::{query_all_in, Measure, Viewport};
use crate::scroll::{use_choreography_with_deps, PinTrack, ScrollEnd, ScrollScene, Signal, TriggerPoint};

fn is_desktop() -> bool {
    Viewport::current().map(|v| v.width >= DESKTOP_MIN_WIDTH).unwrap_or(false)
}

/// Window scroll offset that puts a pinned section at `target` progress.
fn settle_scroll_y(scroll_y: f64, progress: f64, target: f64, distance: f64) -> f64 {
    scroll_y + (target - progress) * distance
}

fn place_panels(panels: &[HtmlElement], offset_percent: f64) {
    let pose = Pose::IDENTITY.x_percent(offset_percent);
    for panel in panels {
        pose.apply(panel);
    }
}

struct PinSnap {
    section: NodeRef,
    track: PinTrack,
    distance: f64,
    animator: Animator,
    settling: Rc<Cell<Option<TrackId>>>,
}

impl PinSnap {
    fn cancel(&self) {
        if let Some(id) = self.settling.take() {
            self.animator.cancel(id);
        }
    }

    /// Glides the window to the nearest panel boundary once scrolling went quiet.
    fn settle(&self) {
        let (Some(window), Ok(rect)) = (web_sys::window(), self.section.measure()) else {
            return;
        };
        let progress = -rect.top / self.distance;
        if !(0.0..1.0).contains(&progress) {
            return;
        }
        let Some(settle) = self.track.settle(progress) else {
            return;
        };
        let Ok(from) = window.scroll_y() else {
            return;
        };
        let to = settle_scroll_y(from, progress, settle.target, self.distance);
        log::debug!("Settling process pin to panel {}", self.track.panel_at(settle.target));

        self.cancel();
        let settling = self.settling.clone();
        let id = self.animator.tween_then(
            Tween::new(settle.duration_ms, settle.ease),
            move |p| window.scroll_to_with_x_and_y(0.0, from + (to - from) * p),
            move || settling.set(None),
        );
        self.settling.set(id);
    }
}

fn build_pin(scene: &mut ScrollScene, animator: &Animator, section: &NodeRef, wrapper: &NodeRef) {
    let panels = query_all_in(wrapper, ".step-panel");
    let Some(outer) = section.cast::<HtmlElement>() else {
        return;
    };
    let Some(track) = Viewport::current().ok().and_then(|v| PinTrack::for_viewport(v.width, panels.len())) else {
        return;
    };
    // Panels only sit in a row once the section is pinned
    let _ = outer.class_list().add_1("pinned");
    let panel_width = panels.first().map(|panel| panel.offset_width() as f64).unwrap_or(0.0);
    let distance = track.scroll_distance(panel_width);
    if distance <= 0.0 {
        log::debug!("Process panels have no width yet, not pinning");
        unpin(section, wrapper);
        return;
    }
    let _ = outer.style().set_property("height", &format!("calc(100vh + {}px)", distance));
    log::info!("Process pinned over {}px for {} panels", distance, track.panels());

    let lag = Chase::new(
        QuickTo::new(0.0, PIN_SCRUB_LAG_MS, Ease::Power3Out),
        animator.clone(),
        move |progress: &QuickTo| place_panels(&panels, track.offset_percent(progress.value())),
    );
    scene.scrub("process pin", section.clone(), TriggerPoint::top_at(0.0), ScrollEnd::Distance(distance), move |signal| {
        if let Signal::Progress(p) = signal {
            lag.update(|progress| progress.set_target(p));
        }
    });

    let Some(window) = web_sys::window() else {
        return;
    };
    let snap = Rc::new(PinSnap {
        section: section.clone(),
        track,
        distance,
        animator: animator.clone(),
        settling: Rc::new(Cell::new(None)),
    });
    let idle: Rc<RefCell<Option<Timeout>>> = Rc::default();
    let on_scroll = {
        let snap = snap.clone();
        let idle = idle.clone();
        EventListener::new(&window, "scroll", move |_| {
            let snap = snap.clone();
            *idle.borrow_mut() = Some(Timeout::new(SNAP_IDLE_MS, move || snap.settle()));
        })
    };
    // Fresh user input always wins over an in-flight settle
    let on_wheel = {
        let snap = snap.clone();
        EventListener::new(&window, "wheel", move |_| snap.cancel())
    };
    let on_touch = EventListener::new(&window, "touchstart", move |_| snap.cancel());
    scene.hold((on_scroll, on_wheel, on_touch, idle));
}

fn unpin(section: &NodeRef, wrapper: &NodeRef) {
    if let Some(outer) = section.cast::<HtmlElement>() {
        let _ = outer.style().remove_property("height");
        let _ = outer.class_list().remove_1("pinned");
    }
    place_panels(&query_all_in(wrapper, ".step-panel"), 0.0);
}

#[function_component(Process)]
pub fn process() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let section = use_node_ref();
    let wrapper = use_node_ref();
    let desktop = use_state(is_desktop);
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(PIN_SETUP_DELAY_MS, move || ready.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    {
        let desktop = desktop.clone();
        use_event_with_window("resize", move |_: Event| {
            let now = is_desktop();
            if now != *desktop {
                desktop.set(now);
            }
        });
    }

    {
        let section = section.clone();
        let wrapper = wrapper.clone();
        let pinned = *ready && *desktop;
        use_choreography_with_deps((pinned, content.process.len()), move |(pinned, _), scene, animator| {
            if *pinned {
                build_pin(scene, animator, &section, &wrapper);
            } else {
                unpin(&section, &wrapper);
            }
        });
    }

    html! {
        <section ref={section} id="process" class="process">
            <div class="process-stage">
                <div class="section-heading">
                    <p class="eyebrow">{"Notre Méthodologie"}</p>
                    <h2>{"Un processus d'excellence."}</h2>
                </div>
                <div ref={wrapper} class="process-rail">
                    { for content.process.iter().map(|step| html! {
                        <div key={step.id.clone()} class="step-panel">
                            <div class="step-number">{ step.id.clone() }</div>
                            <div class="step-body">
                                <h3>{ step.title.clone() }</h3>
                                <p>{ step.text.clone() }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_scrolls_by_the_remaining_share_of_the_distance() {
        assert!((settle_scroll_y(1000.0, 0.4, 1.0 / 3.0, 3000.0) - 800.0).abs() < 1e-6);
        assert!((settle_scroll_y(1000.0, 0.6, 2.0 / 3.0, 3000.0) - 1200.0).abs() < 1e-6);
        assert_eq!(settle_scroll_y(500.0, 0.5, 0.5, 3000.0), 500.0);
    }
}
