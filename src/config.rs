//! Page-supplied configuration.
//!
//! A page may embed
//! `<script type="application/json" id="pagefx-config">{ ... }</script>`
//! to override timings, thresholds or phrases. Absent or blank means defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use motion::config::MotionConfig;
use web_sys::Document;

use crate::error::PageError;

pub const CONFIG_ELEMENT_ID: &str = "pagefx-config";

/// Parse the text of the config element.
pub fn parse(raw: &str) -> Result<MotionConfig, PageError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(MotionConfig::default());
    }
    Ok(MotionConfig::from_json(raw)?)
}

/// Read the config element. The error, if any, is returned alongside the
/// defaults so it can be logged once logging is up.
pub fn load(document: &Document) -> (MotionConfig, Option<PageError>) {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return (MotionConfig::default(), None);
    };
    match parse(&element.text_content().unwrap_or_default()) {
        Ok(config) => (config, None),
        Err(err) => (MotionConfig::default(), Some(err)),
    }
}
