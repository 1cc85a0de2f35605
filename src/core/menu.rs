//! Mobile navigation menu state

/// Open/closed state of the mobile menu.
///
/// Starts closed on every page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn hamburger_class(&self) -> &'static str {
        if self.open { "hamburger open" } else { "hamburger" }
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open { "mobile-menu open" } else { "mobile-menu" }
    }
}
