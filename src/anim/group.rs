use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

use super::tween::Tween;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(u64);

type Step = Box<dyn FnMut(f64) -> Flow>;
type Done = Box<dyn FnOnce()>;

struct Track {
    id: TrackId,
    step: Step,
    done: Option<Done>,
}

/// Frame-stepped animations with their completion callbacks.
#[derive(Default)]
pub struct TrackSet {
    tracks: Vec<Track>,
    next_id: u64,
}

impl TrackSet {
    pub fn push(&mut self, step: Step, done: Option<Done>) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id += 1;
        self.tracks.push(Track { id, step, done });
        id
    }

    pub fn cancel(&mut self, id: TrackId) {
        self.tracks.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Steps every track by `dt_ms` and hands back the completion callbacks of the
    /// ones that finished. Callers run them once the set is no longer borrowed, since
    /// a callback usually starts the next animation.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<Done> {
        let mut done = Vec::new();
        self.tracks.retain_mut(|track| match (track.step)(dt_ms) {
            Flow::Running => true,
            Flow::Finished => {
                if let Some(cb) = track.done.take() {
                    done.push(cb);
                }
                false
            }
        });
        done
    }
}

struct GroupInner {
    tracks: RefCell<TrackSet>,
    frame: RefCell<Option<AnimationFrame>>,
    last_ts: Cell<Option<f64>>,
    released: Cell<bool>,
}

impl GroupInner {
    fn schedule(self: &Rc<Self>) {
        if self.released.get() || self.frame.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        let handle = request_animation_frame(move |ts| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(ts);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, ts: f64) {
        self.frame.borrow_mut().take();
        if self.released.get() {
            return;
        }
        let dt = self.last_ts.get().map(|last| ts - last).unwrap_or(0.0);
        self.last_ts.set(Some(ts));

        let done = self.tracks.borrow_mut().advance(dt);
        for cb in done {
            cb();
        }

        if self.tracks.borrow().is_idle() {
            self.last_ts.set(None);
        } else {
            self.schedule();
        }
    }

    fn release(&self) {
        self.released.set(true);
        self.frame.borrow_mut().take();
        self.tracks.borrow_mut().clear();
    }
}

/// Owns every animation a component starts. Dropping the group cancels the
/// pending frame and discards all in-flight tracks, so nothing touches an element
/// after its component unmounted.
pub struct AnimationGroup {
    inner: Rc<GroupInner>,
}

impl AnimationGroup {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(GroupInner {
                tracks: RefCell::new(TrackSet::default()),
                frame: RefCell::new(None),
                last_ts: Cell::new(None),
                released: Cell::new(false),
            }),
        }
    }

    pub fn animator(&self) -> Animator {
        Animator { inner: Rc::downgrade(&self.inner) }
    }
}

impl Default for AnimationGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationGroup {
    fn drop(&mut self) {
        self.inner.release();
    }
}

/// Cheap handle for starting animations from event callbacks. Once its group is
/// gone every call is a no-op.
#[derive(Clone)]
pub struct Animator {
    inner: Weak<GroupInner>,
}

impl Animator {
    pub fn is_live(&self) -> bool {
        self.inner.upgrade().map(|g| !g.released.get()).unwrap_or(false)
    }

    /// Runs `step` every frame with the elapsed milliseconds until it reports
    /// `Flow::Finished`.
    pub fn drive(&self, step: impl FnMut(f64) -> Flow + 'static) -> Option<TrackId> {
        self.push(Box::new(step), None)
    }

    pub fn tween(&self, tween: Tween, apply: impl FnMut(f64) + 'static) -> Option<TrackId> {
        self.push(tween_step(tween, apply), None)
    }

    pub fn tween_then(
        &self,
        tween: Tween,
        apply: impl FnMut(f64) + 'static,
        done: impl FnOnce() + 'static,
    ) -> Option<TrackId> {
        self.push(tween_step(tween, apply), Some(Box::new(done)))
    }

    pub fn cancel(&self, id: TrackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.tracks.borrow_mut().cancel(id);
        }
    }

    fn push(&self, step: Step, done: Option<Done>) -> Option<TrackId> {
        let inner = self.inner.upgrade()?;
        if inner.released.get() {
            return None;
        }
        let id = inner.tracks.borrow_mut().push(step, done);
        inner.schedule();
        Some(id)
    }
}

fn tween_step(mut tween: Tween, mut apply: impl FnMut(f64) + 'static) -> Step {
    apply(tween.progress());
    Box::new(move |dt| {
        tween.advance(dt);
        apply(tween.progress());
        if tween.is_finished() {
            Flow::Finished
        } else {
            Flow::Running
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::easing::Ease;

    #[test]
    fn finished_tracks_hand_back_their_callbacks() {
        let mut set = TrackSet::default();
        let fired = Rc::new(Cell::new(0));
        let values = Rc::new(RefCell::new(Vec::new()));

        let sink = values.clone();
        let counter = fired.clone();
        set.push(
            tween_step(Tween::new(100.0, Ease::Linear), move |p| sink.borrow_mut().push(p)),
            Some(Box::new(move || counter.set(counter.get() + 1))),
        );

        assert!(set.advance(50.0).is_empty());
        let done = set.advance(50.0);
        assert_eq!(done.len(), 1);
        for cb in done {
            cb();
        }
        assert_eq!(fired.get(), 1);
        assert!(set.is_idle());
        assert_eq!(*values.borrow(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn cancelled_tracks_never_complete() {
        let mut set = TrackSet::default();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let id = set.push(Box::new(|_| Flow::Finished), Some(Box::new(move || flag.set(true))));
        set.cancel(id);
        assert!(set.advance(16.0).is_empty());
        assert!(!fired.get());
    }

    #[test]
    fn animator_outliving_its_group_is_inert() {
        let group = AnimationGroup::new();
        let animator = group.animator();
        drop(group);
        assert!(!animator.is_live());
        assert!(animator.drive(|_| Flow::Running).is_none());
    }
}
