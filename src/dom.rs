//! Thin helpers over `web_sys` shared by the interaction hooks.
//!
//! Every handle here owns its JS closure and detaches it when dropped, so a
//! hook can return its bindings from an effect and let the cleanup drop them.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// First element matching `selector`, or `None` when absent or the selector is invalid.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    el.style().set_property(property, value)
}

/// Suppress or restore page scrolling while an overlay is open.
pub fn set_scroll_locked(locked: bool) -> Result<(), JsValue> {
    let Some(body) = document().and_then(|d| d.body()) else {
        return Ok(());
    };
    if locked {
        body.style().set_property("overflow", "hidden")
    } else {
        body.style().set_property("overflow", "")
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Logs the outcome of binding one behavior and keeps whatever was bound.
pub fn bound<T>(behavior: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(Some(bindings)) => {
            debug!("{} bound", behavior);
            Some(bindings)
        }
        Ok(None) => {
            debug!("{} skipped, markup not present", behavior);
            None
        }
        Err(err) => {
            warn!("{} failed to bind: {:?}", behavior, err);
            None
        }
    }
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Same as [`Listener::new`] but registered as passive, for scroll and pointer tracking.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An intersection observer that calls `on_visible` for every entry that is
/// intersecting. Disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Observer {
    pub fn new<F>(elements: &[Element], threshold: f64, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target());
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for el in elements {
            observer.observe(el);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type FrameSlot = Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop. `tick` receives the frame timestamp and
/// returns whether another frame should be scheduled. Dropping the handle
/// cancels the pending frame.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    _slot: FrameSlot,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let pending = Rc::new(Cell::new(None));
        let slot: FrameSlot = Rc::new(std::cell::RefCell::new(None));

        let next_slot = Rc::downgrade(&slot);
        let next_pending = pending.clone();
        let frame_window = window.clone();
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            next_pending.set(None);
            if !tick(timestamp) {
                return;
            }
            // The slot is gone once the handle has been dropped.
            let Some(slot) = next_slot.upgrade() else {
                return;
            };
            if let Some(callback) = slot.borrow().as_ref() {
                let id = frame_window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok();
                next_pending.set(id);
            };
        }) as Box<dyn FnMut(f64)>);

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(closure);

        Ok(Self {
            pending,
            _slot: slot,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
