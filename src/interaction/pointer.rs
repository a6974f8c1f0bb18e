use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub fn from_mouse(event: &MouseEvent) -> Self {
        PointerSample {
            x: event.client_x() as f64,
            y: event.client_y() as f64,
            timestamp_ms: event.time_stamp() as u64,
        }
    }

    /// First active touch, falling back to the touches that just lifted so a
    /// `touchend` still reports where the finger left the screen.
    pub fn from_touch(event: &TouchEvent) -> Option<Self> {
        let touch = event.touches().get(0).or_else(|| event.changed_touches().get(0))?;
        Some(PointerSample {
            x: touch.client_x() as f64,
            y: touch.client_y() as f64,
            timestamp_ms: event.time_stamp() as u64,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// A normalized pointer update as seen by subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMotion {
    pub sample: PointerSample,
    pub kind: PointerKind,
    pub phase: PointerPhase,
    /// Movement since the previous sample of the same kind.
    pub dx: f64,
    pub dy: f64,
    /// Exponentially smoothed velocity in px/ms.
    pub velocity: (f64, f64),
}

const VELOCITY_SMOOTHING: f64 = 0.2;

type Subscriber = Rc<dyn Fn(&PointerMotion)>;

#[derive(Default)]
struct TrackerInner {
    last: Option<(PointerKind, PointerSample)>,
    velocity: (f64, f64),
    subscribers: Vec<(u64, Subscriber)>,
    next_id: u64,
}

impl TrackerInner {
    fn normalize(&mut self, sample: PointerSample, kind: PointerKind, phase: PointerPhase) -> PointerMotion {
        let (dx, dy, dt) = match self.last {
            Some((last_kind, last)) if last_kind == kind => (
                sample.x - last.x,
                sample.y - last.y,
                sample.timestamp_ms.saturating_sub(last.timestamp_ms) as f64,
            ),
            _ => (0.0, 0.0, 0.0),
        };
        if dt > 0.0 {
            let (vx, vy) = self.velocity;
            self.velocity = (
                vx + (dx / dt - vx) * VELOCITY_SMOOTHING,
                vy + (dy / dt - vy) * VELOCITY_SMOOTHING,
            );
        }
        self.last = Some((kind, sample));
        PointerMotion { sample, kind, phase, dx, dy, velocity: self.velocity }
    }
}

/// The one place raw pointer input is read. Window-level listeners feed it; every
/// interested component holds a `PointerSubscription` and receives normalized
/// motion until the subscription is dropped.
#[derive(Clone, Default)]
pub struct PointerTracker {
    inner: Rc<RefCell<TrackerInner>>,
}

impl PartialEq for PointerTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&PointerMotion) + 'static) -> PointerSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        PointerSubscription { id, tracker: Rc::downgrade(&self.inner) }
    }

    pub fn last_sample(&self) -> Option<PointerSample> {
        self.inner.borrow().last.map(|(_, sample)| sample)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Normalizes a sample and fans it out. Subscribers are called after the
    /// tracker is released, so they may subscribe or unsubscribe while handling it.
    pub fn record(&self, sample: PointerSample, kind: PointerKind, phase: PointerPhase) -> PointerMotion {
        let (motion, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            let motion = inner.normalize(sample, kind, phase);
            let subscribers: Vec<Subscriber> = inner.subscribers.iter().map(|(_, s)| s.clone()).collect();
            (motion, subscribers)
        };
        for subscriber in subscribers {
            subscriber(&motion);
        }
        motion
    }

    /// Attaches the window listeners that feed this tracker. Dropping the returned
    /// listeners detaches them.
    pub fn listen(&self) -> Vec<EventListener> {
        let Some(window) = web_sys::window() else {
            return Vec::new();
        };
        let mouse = |name: &'static str, phase: PointerPhase| {
            let tracker = self.clone();
            EventListener::new(&window, name, move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    tracker.record(PointerSample::from_mouse(event), PointerKind::Mouse, phase);
                }
            })
        };
        let touch = |name: &'static str, phase: PointerPhase| {
            let tracker = self.clone();
            EventListener::new(&window, name, move |event: &Event| {
                let sample = event.dyn_ref::<TouchEvent>().and_then(PointerSample::from_touch);
                if let Some(sample) = sample {
                    tracker.record(sample, PointerKind::Touch, phase);
                }
            })
        };
        vec![
            mouse("mousedown", PointerPhase::Press),
            mouse("mousemove", PointerPhase::Move),
            mouse("mouseup", PointerPhase::Release),
            touch("touchstart", PointerPhase::Press),
            touch("touchmove", PointerPhase::Move),
            touch("touchend", PointerPhase::Release),
            touch("touchcancel", PointerPhase::Release),
        ]
    }
}

/// Keeps a subscriber registered for as long as it lives.
pub struct PointerSubscription {
    id: u64,
    tracker: Weak<RefCell<TrackerInner>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.tracker.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.subscribers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PointerProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page-wide `PointerTracker` and its window listeners.
#[function_component(PointerProvider)]
pub fn pointer_provider(props: &PointerProviderProps) -> Html {
    let tracker = use_state(PointerTracker::new);

    {
        let tracker = (*tracker).clone();
        use_effect_with_deps(
            move |_| {
                let listeners = tracker.listen();
                log::debug!("Pointer tracker listening with {} window listeners", listeners.len());
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <ContextProvider<PointerTracker> context={(*tracker).clone()}>
            { props.children.clone() }
        </ContextProvider<PointerTracker>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample(x: f64, y: f64, t: u64) -> PointerSample {
        PointerSample { x, y, timestamp_ms: t }
    }

    #[test]
    fn deltas_are_measured_per_input_kind() {
        let tracker = PointerTracker::new();
        let first = tracker.record(sample(10.0, 10.0, 0), PointerKind::Mouse, PointerPhase::Move);
        assert_eq!((first.dx, first.dy), (0.0, 0.0));

        let second = tracker.record(sample(15.0, 7.0, 10), PointerKind::Mouse, PointerPhase::Move);
        assert_eq!((second.dx, second.dy), (5.0, -3.0));
        assert!(second.velocity.0 > 0.0);

        let touch = tracker.record(sample(200.0, 200.0, 20), PointerKind::Touch, PointerPhase::Move);
        assert_eq!((touch.dx, touch.dy), (0.0, 0.0));
    }

    #[test]
    fn subscribers_receive_motion_until_dropped() {
        let tracker = PointerTracker::new();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        let subscription = tracker.subscribe(move |_| counter.set(counter.get() + 1));

        tracker.record(sample(1.0, 1.0, 1), PointerKind::Mouse, PointerPhase::Move);
        assert_eq!(seen.get(), 1);

        drop(subscription);
        assert_eq!(tracker.subscriber_count(), 0);
        tracker.record(sample(2.0, 2.0, 2), PointerKind::Mouse, PointerPhase::Release);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn a_subscriber_may_unsubscribe_itself_while_handling_motion() {
        let tracker = PointerTracker::new();
        let slot: Rc<RefCell<Option<PointerSubscription>>> = Rc::new(RefCell::new(None));
        let handle = slot.clone();
        let subscription = tracker.subscribe(move |motion| {
            if motion.phase == PointerPhase::Release {
                handle.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(subscription);

        tracker.record(sample(0.0, 0.0, 0), PointerKind::Mouse, PointerPhase::Release);
        assert_eq!(tracker.subscriber_count(), 0);
    }
}
