//! Count-up statistics.
//!
//! Each stats container gets its own observer and its own [`CounterGroup`].
//! The first time a container crosses the threshold, every `.count-animate`
//! inside it starts counting, and the container is unobserved. All running
//! counters in a group share one animation-frame loop that stops once the
//! last of them has written its final value.
//!
//! Whether a counter has run is read from the element's `animated` class, so
//! an element matched by both groups, or marked in the markup, counts once.

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use std::cell::RefCell;
use std::rc::Rc;

use motion::config::CounterConfig;
use motion::counter::{CounterElement, CounterGroup, CounterRun};
use web_sys::{Document, Element};

use crate::dom;
use crate::error::PageError;
use crate::frame::FrameLoop;

/// `(container, members)` selector pairs.
pub const GROUPS: [(&str, &str); 2] = [
    ("#portfolio", "#portfolio .count-animate"),
    (".client-stats-showcase", ".client-stats-showcase .count-animate"),
];

pub const ANIMATED_CLASS: &str = "animated";

pub fn install(document: &Document, config: &CounterConfig) -> Result<(), PageError> {
    install_groups(|container, members| install_group(document, container, members, config));
    Ok(())
}

/// Run `install_group` for every entry in [`GROUPS`]. A group that fails is
/// logged and the rest are still installed. Returns how many succeeded.
fn install_groups<F>(mut install_group: F) -> usize
where
    F: FnMut(&str, &str) -> Result<(), PageError>,
{
    let mut installed = 0;
    for (container, members) in GROUPS {
        match install_group(container, members) {
            Ok(()) => installed += 1,
            Err(err) => log::warn!("counters: {container} disabled: {err}"),
        }
    }
    installed
}

fn is_marked(element: &Element) -> bool {
    element.class_list().contains(ANIMATED_CLASS)
}

fn install_group(
    document: &Document,
    container_selector: &str,
    member_selector: &str,
    config: &CounterConfig,
) -> Result<(), PageError> {
    let Some(container) = document.query_selector(container_selector)? else {
        log::debug!("counters: no {container_selector}");
        return Ok(());
    };

    let elements = dom::query_all(document, member_selector)?;
    let members = elements
        .iter()
        .map(|el| {
            CounterElement::from_attrs(
                el.get_attribute("data-target").as_deref(),
                el.get_attribute("data-format").as_deref(),
                is_marked(el),
            )
        })
        .collect();
    let mut group = CounterGroup::new(members, config.duration_ms);

    let running: Rc<RefCell<Vec<(Element, CounterRun)>>> = Rc::new(RefCell::new(Vec::new()));
    let frames = {
        let running = Rc::clone(&running);
        FrameLoop::new(move |timestamp| {
            let mut running = running.borrow_mut();
            running.retain_mut(|(element, run)| {
                let frame = run.tick(timestamp);
                element.set_text_content(Some(&frame.text));
                !frame.done
            });
            !running.is_empty()
        })
    };

    let label = container_selector.to_owned();
    let watched = container.clone();
    dom::observe(&[container], config.threshold, move |batch, observer| {
        if group.has_fired() {
            return;
        }
        let started = group.on_batch(batch);
        if !group.has_fired() {
            return;
        }
        observer.unobserve(&watched);

        let mut count = 0;
        {
            let mut running = running.borrow_mut();
            for (index, run) in started {
                let element = &elements[index];
                // Another group may have started it since this one was built.
                if is_marked(element) {
                    continue;
                }
                if let Err(err) = element.class_list().add_1(ANIMATED_CLASS) {
                    log::debug!("counters: could not mark element animated: {err:?}");
                }
                running.push((element.clone(), run));
                count += 1;
            }
        }
        log::debug!("counters: {label} fired, {count} started");
        if count > 0 {
            if let Err(err) = frames.request() {
                log::warn!("counters: {err}");
            }
        }
    })?;
    Ok(())
}
