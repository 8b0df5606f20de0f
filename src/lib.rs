//! # pagefx
//!
//! Page behaviors for the marketing site, compiled to WebAssembly and loaded
//! as the page's only script. The timing logic lives in the `motion` crate;
//! this crate binds it to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Stored light/dark preference and the toggle control |
//! | [`nav`] | Smooth in-page scrolling and the mobile menu |
//! | [`reveal`] | Throttled one-shot fade-in of page sections |
//! | [`counters`] | One-shot count-up of stats groups |
//! | [`typing`] | Visibility-gated hero typing effect |
//! | [`frame`] | Cancellable `requestAnimationFrame` loop |
//! | [`dom`] | `web-sys` lookups, listeners and observers |
//! | [`config`] | Optional JSON config embedded in the page |
//! | [`error`] | Error type for behavior installers |
//!
//! Each behavior is installed independently; one that fails or finds no
//! markup is logged and skipped without affecting the rest.

pub mod config;
pub mod counters;
pub mod dom;
pub mod error;
pub mod frame;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod typing;

use motion::config::MotionConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::error::PageError;

fn report(feature: &str, result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{feature} disabled: {err}");
    }
}

fn init_logging(config: &MotionConfig) {
    let Some(level) = config.level_filter().unwrap_or(log::LevelFilter::Warn).to_level() else {
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("pagefx: logger unavailable: {err}").into());
    }
}

/// Everything that needs the parsed document.
fn init_page(document: &Document, config: &MotionConfig) {
    report("theme", theme::apply_stored(document));
    report("smooth scroll", nav::install_smooth_scroll(document));
    report("mobile menu", nav::install_mobile_menu(document, &config.menu));
    report("section reveal", reveal::install(document, &config.reveal));
    report("counters", counters::install(document, &config.counter));
    report("typing", typing::install(document, &config.typing));
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::warn_1(&format!("pagefx: {err}").into());
            return;
        }
    };

    let (config, config_error) = config::load(&document);
    init_logging(&config);
    if let Some(err) = config_error {
        log::warn!("ignoring page config: {err}");
    }

    report("theme toggle", theme::install_toggle(&document));

    if document.ready_state() == "loading" {
        let target = document.clone();
        report(
            "page init",
            dom::listen_once(&target, "DOMContentLoaded", move || init_page(&document, &config)),
        );
    } else {
        init_page(&document, &config);
    }
}
