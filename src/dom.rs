//! Thin `web-sys` helpers shared by the behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lookups return `Result` so installers can bail with `?`. Event and
//! observer closures live for the whole page and are leaked with `forget`.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

use motion::visibility::Transition;

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, PageError> {
    document.body().ok_or(PageError::NoBody)
}

/// High-resolution page time in milliseconds, same clock as animation frames.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// All elements under `document` matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Elements under `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` to `event` on `target` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a handler that runs on the first `event` only.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(handler);
    target.add_event_listener_with_callback(event, callback.unchecked_ref())?;
    Ok(())
}

/// Create an `IntersectionObserver` at `threshold` watching `targets`.
///
/// `handler` receives each batch as [`Transition`]s plus the observer, so it
/// can stop watching elements.
pub fn observe<F>(targets: &[Element], threshold: f64, mut handler: F) -> Result<IntersectionObserver, PageError>
where
    F: FnMut(Vec<Transition<Element>>, &IntersectionObserver) + 'static,
{
    let callback =
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| {
                    value
                        .dyn_ref::<IntersectionObserverEntry>()
                        .map(|entry| Transition::new(entry.target(), entry.is_intersecting()))
                })
                .collect();
            handler(batch, &observer);
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&threshold.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
