use std::any::Any;

use crate::geometry::{Measure, Viewport};

use super::trigger::{scrub_progress, ScrollEnd, TriggerPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// A once-binding's trigger came into range.
    Enter,
    /// A scrub binding's progress changed.
    Progress(f64),
}

enum Mode {
    Once { start: TriggerPoint, fired: bool },
    Scrub { start: TriggerPoint, end: ScrollEnd, last: Option<f64> },
}

struct Binding {
    label: &'static str,
    trigger: Box<dyn Measure>,
    mode: Mode,
    react: Box<dyn FnMut(Signal)>,
}

/// Every scroll-driven effect of one section. Refreshed on each scroll or resize;
/// once released it drops its bindings and stays inert.
#[derive(Default)]
pub struct ScrollScene {
    bindings: Vec<Binding>,
    resources: Vec<Box<dyn Any>>,
    released: bool,
}

impl ScrollScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires `react(Signal::Enter)` the first time `start` is reached, never again
    /// during this mount.
    pub fn once(
        &mut self,
        label: &'static str,
        trigger: impl Measure + 'static,
        start: TriggerPoint,
        react: impl FnMut(Signal) + 'static,
    ) {
        self.bind(label, trigger, Mode::Once { start, fired: false }, react);
    }

    pub fn scrub(
        &mut self,
        label: &'static str,
        trigger: impl Measure + 'static,
        start: TriggerPoint,
        end: ScrollEnd,
        react: impl FnMut(Signal) + 'static,
    ) {
        self.bind(label, trigger, Mode::Scrub { start, end, last: None }, react);
    }

    /// Ties an extra listener, timer or animation handle to this scene's lifetime.
    pub fn hold(&mut self, resource: impl Any) {
        if !self.released {
            self.resources.push(Box::new(resource));
        }
    }

    fn bind(
        &mut self,
        label: &'static str,
        trigger: impl Measure + 'static,
        mode: Mode,
        react: impl FnMut(Signal) + 'static,
    ) {
        if self.released {
            return;
        }
        self.bindings.push(Binding { label, trigger: Box::new(trigger), mode, react: Box::new(react) });
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn refresh(&mut self, viewport: &Viewport) {
        if self.released {
            return;
        }
        for binding in &mut self.bindings {
            let rect = match binding.trigger.measure() {
                Ok(rect) => rect,
                Err(err) => {
                    log::debug!("Skipping scroll binding {}: {}", binding.label, err);
                    continue;
                }
            };
            match &mut binding.mode {
                Mode::Once { start, fired } => {
                    if !*fired && start.reached(&rect, viewport) {
                        *fired = true;
                        (binding.react)(Signal::Enter);
                    }
                }
                Mode::Scrub { start, end, last } => {
                    let progress = scrub_progress(&rect, viewport, *start, *end);
                    if *last != Some(progress) {
                        *last = Some(progress);
                        (binding.react)(Signal::Progress(progress));
                    }
                }
            }
        }
    }

    pub fn release(&mut self) {
        self.released = true;
        self.bindings.clear();
        self.resources.clear();
    }
}
