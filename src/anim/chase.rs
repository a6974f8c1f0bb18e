use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::group::{Animator, Flow};
use super::tween::QuickTo;

/// State that keeps easing towards a target until it comes to rest.
pub trait Settling {
    fn advance(&mut self, dt_ms: f64);
    fn is_settled(&self) -> bool;
}

impl Settling for QuickTo {
    fn advance(&mut self, dt_ms: f64) {
        QuickTo::advance(self, dt_ms);
    }

    fn is_settled(&self) -> bool {
        QuickTo::is_settled(self)
    }
}

/// Keeps one frame track alive while `T` is still moving and renders it each frame.
/// Retargeting a resting value restarts the track; retargeting a moving one just
/// changes where it is heading.
pub struct Chase<T> {
    state: Rc<RefCell<T>>,
    running: Rc<Cell<bool>>,
    animator: Animator,
    render: Rc<dyn Fn(&T)>,
}

impl<T> Clone for Chase<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            running: self.running.clone(),
            animator: self.animator.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T: Settling + 'static> Chase<T> {
    pub fn new(state: T, animator: Animator, render: impl Fn(&T) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            running: Rc::new(Cell::new(false)),
            animator,
            render: Rc::new(render),
        }
    }

    pub fn update(&self, change: impl FnOnce(&mut T)) {
        change(&mut self.state.borrow_mut());
        self.kick();
    }

    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.state.borrow())
    }

    fn kick(&self) {
        if self.running.get() || self.state.borrow().is_settled() {
            return;
        }
        let state = self.state.clone();
        let running = self.running.clone();
        let render = self.render.clone();
        let started = self.animator.drive(move |dt| {
            let mut current = state.borrow_mut();
            current.advance(dt);
            render(&current);
            if current.is_settled() {
                running.set(false);
                Flow::Finished
            } else {
                Flow::Running
            }
        });
        self.running.set(started.is_some());
    }
}
