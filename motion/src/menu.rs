//! Mobile navigation open/closed state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Icon classes for the menu toggle's `<i>` child.
pub const ICON_CLOSED: &str = "fas fa-bars";
pub const ICON_OPEN: &str = "fas fa-times";

/// Attribute and class values to write after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    /// `aria-expanded` on the toggle button.
    pub aria_expanded: &'static str,
    /// `aria-hidden` on the navigation panel.
    pub aria_hidden: &'static str,
    pub icon_class: &'static str,
    /// Whether `is-open` (panel) and `menu-open` (body) should be present.
    pub open: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    /// Read state from the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn from_aria_expanded(raw: Option<&str>) -> Self {
        Self { expanded: raw == Some("true") }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Flip open/closed and describe the resulting markup.
    #[must_use]
    pub fn toggle(self) -> (Self, MenuView) {
        let next = Self { expanded: !self.expanded };
        (next, next.view())
    }

    #[must_use]
    pub fn view(self) -> MenuView {
        MenuView {
            aria_expanded: bool_attr(self.expanded),
            aria_hidden: bool_attr(!self.expanded),
            icon_class: if self.expanded { ICON_OPEN } else { ICON_CLOSED },
            open: self.expanded,
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
