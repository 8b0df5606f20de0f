//! Scroll-triggered fade-in for page sections.
//!
//! Every section except the hero starts hidden (by stylesheet) and is brought
//! to full opacity the first time it crosses the reveal threshold. The
//! observer callback is throttled: batches that arrive inside the cooldown are
//! dropped, and a dropped section is picked up again on its next crossing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use motion::config::RevealConfig;
use motion::throttle;
use motion::visibility::{RevealTracker, Transition};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver};

use crate::dom;
use crate::error::PageError;

pub const SECTIONS: &str = "section:not(#hero)";

/// Stays observed after reveal; its counter observer owns the one-shot.
pub const PINNED_SECTION_ID: &str = "portfolio";

fn reveal(element: &Element) -> Result<(), PageError> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = element.style();
    style.set_property("opacity", "1")?;
    style.set_property("transform", "translateY(0)")?;
    Ok(())
}

type Batch = (Vec<Transition<Element>>, IntersectionObserver);

pub fn install(document: &Document, config: &RevealConfig) -> Result<(), PageError> {
    let sections = dom::query_all(document, SECTIONS)?;
    if sections.is_empty() {
        log::debug!("reveal: no sections");
        return Ok(());
    }

    let pinned = sections.iter().position(|s| s.id() == PINNED_SECTION_ID);
    let mut tracker = RevealTracker::new(pinned);
    for index in 0..sections.len() {
        tracker.watch(index);
    }

    let elements = sections.clone();
    let on_batch = move |(batch, observer): Batch| {
        let batch = batch.into_iter().filter_map(|Transition { target, visibility }| {
            elements
                .iter()
                .position(|el| *el == target)
                .map(|index| Transition { target: index, visibility })
        });
        for action in tracker.on_batch(batch) {
            let element = &elements[action.target];
            if let Err(err) = reveal(element) {
                log::warn!("reveal failed: {err}");
            }
            if action.unwatch {
                observer.unobserve(element);
            }
        }
    };

    let limited = Rc::new(RefCell::new(throttle::wrap(on_batch, config.throttle_ms)));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let window_ms = config.throttle_ms.ceil() as u32;

    dom::observe(&sections, config.threshold, move |batch, observer| {
        let ran = limited.borrow_mut().call(dom::now_ms(), (batch, observer.clone()));
        if ran {
            let limited = Rc::clone(&limited);
            Timeout::new(window_ms, move || limited.borrow_mut().release()).forget();
        }
    })?;
    Ok(())
}
