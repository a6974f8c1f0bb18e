use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use crate::geometry::query_all;

/// Which registered elements the pointer is currently over. Nested targets (a
/// button inside an interactive card) keep the hover alive until the pointer has
/// left all of them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HoverSet {
    over: HashSet<u64>,
}

impl HoverSet {
    pub fn is_hovering(&self) -> bool {
        !self.over.is_empty()
    }

    /// Each returns whether the overall hover state flipped.
    pub fn enter(&mut self, id: u64) -> bool {
        let was = self.is_hovering();
        self.over.insert(id);
        was != self.is_hovering()
    }

    pub fn leave(&mut self, id: u64) -> bool {
        let was = self.is_hovering();
        self.over.remove(&id);
        was != self.is_hovering()
    }
}

#[derive(Default)]
struct RegistryInner {
    entries: HashMap<u64, (Element, Vec<EventListener>)>,
    hover: HoverSet,
    observer: Option<Callback<bool>>,
    next_id: u64,
}

/// Live set of elements the custom cursor reacts to. Interactive components
/// register themselves for as long as they are mounted; the registry only attaches
/// and detaches listeners and never owns the elements.
#[derive(Clone, Default)]
pub struct HoverRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl PartialEq for HoverRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl HoverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_hovering(&self) -> bool {
        self.inner.borrow().hover.is_hovering()
    }

    /// Tracks `element` until the token is dropped. Registering an element twice
    /// yields an inert token for the second call.
    pub fn register(&self, element: Element) -> HoverToken {
        if self.inner.borrow().entries.values().any(|(known, _)| *known == element) {
            return HoverToken { id: None, registry: Weak::new() };
        }
        let id = self.allocate();
        let enter = {
            let registry = self.clone();
            EventListener::new(&element, "mouseenter", move |_| registry.notify(id, true))
        };
        let leave = {
            let registry = self.clone();
            EventListener::new(&element, "mouseleave", move |_| registry.notify(id, false))
        };
        self.inner.borrow_mut().entries.insert(id, (element, vec![enter, leave]));
        HoverToken { id: Some(id), registry: Rc::downgrade(&self.inner) }
    }

    /// One-shot sweep of the document for elements that look interactive. Anything
    /// mounted afterwards is only covered if it registers itself.
    pub fn register_matching(&self, selector: &str) -> Vec<HoverToken> {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return Vec::new();
        };
        query_all(&root, selector)
            .into_iter()
            .map(|el| self.register(el.into()))
            .collect()
    }

    /// Routes hover flips to `observer` until the guard is dropped.
    pub fn observe(&self, observer: Callback<bool>) -> ObserverGuard {
        self.inner.borrow_mut().observer = Some(observer);
        ObserverGuard { registry: Rc::downgrade(&self.inner) }
    }

    fn allocate(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    fn notify(&self, id: u64, entered: bool) {
        let flipped = {
            let mut inner = self.inner.borrow_mut();
            let changed = if entered { inner.hover.enter(id) } else { inner.hover.leave(id) };
            changed.then(|| inner.observer.clone()).flatten()
        };
        if let Some(observer) = flipped {
            observer.emit(entered);
        }
    }
}

fn unregister(inner: &Rc<RefCell<RegistryInner>>, id: u64) {
    let (removed, observer) = {
        let Ok(mut inner) = inner.try_borrow_mut() else {
            return;
        };
        let removed = inner.entries.remove(&id);
        let flipped = inner.hover.leave(id);
        (removed, flipped.then(|| inner.observer.clone()).flatten())
    };
    drop(removed);
    // An element unmounted under the pointer never fires mouseleave.
    if let Some(observer) = observer {
        observer.emit(false);
    }
}

pub struct HoverToken {
    id: Option<u64>,
    registry: Weak<RefCell<RegistryInner>>,
}

impl Drop for HoverToken {
    fn drop(&mut self) {
        if let (Some(id), Some(inner)) = (self.id, self.registry.upgrade()) {
            unregister(&inner, id);
        }
    }
}

pub struct ObserverGuard {
    registry: Weak<RefCell<RegistryInner>>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.observer = None;
            }
        }
    }
}

/// Registers the element behind `node` with the page's hover registry while the
/// calling component is mounted.
#[hook]
pub fn use_hover_target(node: NodeRef) {
    let registry = use_context::<HoverRegistry>();
    use_effect_with_deps(
        move |_| {
            let token = registry.zip(node.cast::<Element>()).map(|(registry, el)| registry.register(el));
            move || drop(token)
        },
        (),
    );
}
