//! Light/dark theme initialization and toggle.
//!
//! Reads the preference from `localStorage`, applies it as a class on
//! `<body>`, and keeps the toggle control's label naming the other mode.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: a browser that refuses `localStorage` (private
//! mode, disabled cookies) starts in light mode every visit and the toggle
//! still works for the current page.

use motion::consts::THEME_STORAGE_KEY;
use motion::theme::Theme;
use web_sys::{Document, Window};

use crate::dom;
use crate::error::PageError;

pub const TOGGLE_ID: &str = "modeToggle";

/// Read the stored preference; anything unreadable counts as light.
pub fn read_preference(window: &Window) -> Theme {
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
            return Theme::from_stored(Some(&value));
        }
    }
    Theme::default()
}

fn persist(window: &Window, theme: Theme) -> Result<(), PageError> {
    if let Some(storage) = window.local_storage()? {
        storage.set_item(THEME_STORAGE_KEY, theme.as_str())?;
    }
    Ok(())
}

fn set_label(document: &Document, theme: Theme) {
    if let Some(toggle) = document.get_element_by_id(TOGGLE_ID) {
        toggle.set_text_content(Some(theme.toggle_label()));
    }
}

/// Apply the stored preference to `<body>` and the toggle label.
pub fn apply_stored(document: &Document) -> Result<(), PageError> {
    let theme = read_preference(&dom::window()?);
    dom::body(document)?.class_list().add_1(theme.as_str())?;
    set_label(document, theme);
    log::debug!("theme: applied stored {}", theme.as_str());
    Ok(())
}

/// Flip the theme, persist it, and relabel the toggle.
pub fn toggle(document: &Document) -> Result<Theme, PageError> {
    let classes = dom::body(document)?.class_list();
    let theme = Theme::from_is_dark(classes.contains("dark")).toggled();
    classes.toggle_with_force("dark", theme.is_dark())?;
    classes.toggle_with_force("light", !theme.is_dark())?;
    persist(&dom::window()?, theme)?;
    set_label(document, theme);
    Ok(theme)
}

/// Wire the toggle control's click handler. Skipped if the control is absent.
pub fn install_toggle(document: &Document) -> Result<(), PageError> {
    let Some(control) = document.get_element_by_id(TOGGLE_ID) else {
        log::debug!("theme: no #{TOGGLE_ID}, toggle disabled");
        return Ok(());
    };
    let document = document.clone();
    dom::listen(&control, "click", move |_| {
        if let Err(err) = toggle(&document) {
            log::warn!("theme toggle failed: {err}");
        }
    })
}
