//! Navigation: smooth in-page scrolling and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use motion::config::MenuConfig;
use motion::menu::MenuState;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;
use crate::error::PageError;

pub const NAV_LINKS: &str = "nav a";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const MOBILE_NAV_ID: &str = "mobile-nav";

/// The selector for an in-page link target, or `None` for links that leave
/// the page (or point at the bare `#`).
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

// =============================================================================
// SMOOTH SCROLL
// =============================================================================

fn scroll_to(document: &Document, selector: &str) -> Result<(), PageError> {
    let Some(target) = document.query_selector(selector)? else {
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Replace jump navigation with smooth scrolling on every in-page nav link.
pub fn install_smooth_scroll(document: &Document) -> Result<(), PageError> {
    for link in dom::query_all(document, NAV_LINKS)? {
        let Some(selector) = link.get_attribute("href").as_deref().and_then(fragment_selector).map(str::to_owned)
        else {
            continue;
        };
        let document = document.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            if let Err(err) = scroll_to(&document, &selector) {
                log::warn!("smooth scroll to {selector} failed: {err}");
            }
        })?;
    }
    Ok(())
}

// =============================================================================
// MOBILE MENU
// =============================================================================

fn toggle_menu(document: &Document, toggle: &Element, panel: &Element) -> Result<(), PageError> {
    let state = MenuState::from_aria_expanded(toggle.get_attribute("aria-expanded").as_deref());
    let (next, view) = state.toggle();

    toggle.set_attribute("aria-expanded", view.aria_expanded)?;
    panel.set_attribute("aria-hidden", view.aria_hidden)?;
    panel.class_list().toggle_with_force("is-open", view.open)?;
    dom::body(document)?.class_list().toggle_with_force("menu-open", view.open)?;
    if let Some(icon) = toggle.query_selector("i")? {
        icon.set_class_name(view.icon_class);
    }
    log::debug!("menu: {}", if next.is_expanded() { "opened" } else { "closed" });
    Ok(())
}

/// Wire the hamburger toggle and close-on-link-click. Needs both the toggle
/// and the panel; otherwise the menu is left alone.
pub fn install_mobile_menu(document: &Document, config: &MenuConfig) -> Result<(), PageError> {
    let (Some(toggle), Some(panel)) =
        (document.get_element_by_id(MENU_TOGGLE_ID), document.get_element_by_id(MOBILE_NAV_ID))
    else {
        log::debug!("menu: #{MENU_TOGGLE_ID} or #{MOBILE_NAV_ID} missing, menu disabled");
        return Ok(());
    };

    let flip: Rc<dyn Fn()> = {
        let (document, toggle, panel) = (document.clone(), toggle.clone(), panel.clone());
        Rc::new(move || {
            if let Err(err) = toggle_menu(&document, &toggle, &panel) {
                log::warn!("menu toggle failed: {err}");
            }
        })
    };

    {
        let flip = Rc::clone(&flip);
        dom::listen(&toggle, "click", move |_| flip())?;
    }

    // Close after the scroll has had a moment to start.
    let delay_ms = config.close_delay_ms;
    for link in dom::query_all_in(&panel, "a")? {
        let flip = Rc::clone(&flip);
        dom::listen(&link, "click", move |_| {
            let flip = Rc::clone(&flip);
            Timeout::new(delay_ms, move || flip()).forget();
        })?;
    }
    Ok(())
}
