//! Scroll-driven UI flags
//!
//! Everything here is recomputed from two browser signals: the vertical
//! scroll offset and intersection notifications for animated blocks.
//! - Navbar switches to its compact "scrolled" variant past 20px
//! - The back-to-top control appears past 600px
//! - Animated blocks reveal once and never hide again

use std::collections::BTreeMap;

use crate::core::content::NavLink;
use crate::core::menu::MenuState;

/// Offset after which the navbar uses its scrolled variant
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Offset after which the back-to-top control is shown
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;

/// Intersection margin; a block must be 60px inside the viewport to reveal
pub const REVEAL_ROOT_MARGIN: &str = "-60px";

/// Delay between staggered siblings of a revealed group
pub const REVEAL_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarVariant {
    #[default]
    Unscrolled,
    Scrolled,
}

impl NavbarVariant {
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLLED_THRESHOLD_PX {
            NavbarVariant::Scrolled
        } else {
            NavbarVariant::Unscrolled
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavbarVariant::Unscrolled => "navbar",
            NavbarVariant::Scrolled => "navbar scrolled",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackToTop {
    #[default]
    Hidden,
    Shown,
}

impl BackToTop {
    pub fn for_offset(offset: f64) -> Self {
        if offset > BACK_TO_TOP_THRESHOLD_PX {
            BackToTop::Shown
        } else {
            BackToTop::Hidden
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            BackToTop::Hidden => 0.0,
            BackToTop::Shown => 1.0,
        }
    }

    pub fn scale(&self) -> f64 {
        match self {
            BackToTop::Hidden => 0.8,
            BackToTop::Shown => 1.0,
        }
    }

    /// Whether the control receives pointer and keyboard input
    pub fn is_interactive(&self) -> bool {
        matches!(self, BackToTop::Shown)
    }

    /// Inline style for the floating control
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}); pointer-events: {};",
            self.opacity(),
            self.scale(),
            if self.is_interactive() { "auto" } else { "none" }
        )
    }
}

/// One-shot reveal state of an animated block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    NotYetShown,
    Shown,
}

impl Reveal {
    /// Next state after an intersection notification. `Shown` is terminal.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Reveal::Shown => Reveal::Shown,
            Reveal::NotYetShown if intersecting => Reveal::Shown,
            Reveal::NotYetShown => Reveal::NotYetShown,
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Reveal::Shown)
    }
}

/// Ephemeral page state derived from scroll and intersection signals
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
    menu: MenuState,
    in_view: BTreeMap<&'static str, Reveal>,
    /// No intersection source: treat every block as visible
    assume_visible: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new vertical scroll offset. Negative offsets (overscroll) clamp to 0.
    pub fn on_scroll(&mut self, offset: f64) {
        self.offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn scrolled_past_threshold(&self) -> bool {
        self.navbar_variant() == NavbarVariant::Scrolled
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top() == BackToTop::Shown
    }

    pub fn navbar_variant(&self) -> NavbarVariant {
        NavbarVariant::for_offset(self.offset)
    }

    pub fn back_to_top(&self) -> BackToTop {
        BackToTop::for_offset(self.offset)
    }

    /// Feed an intersection notification for a block.
    ///
    /// Returns true when this notification revealed the block.
    pub fn on_intersection(&mut self, key: &'static str, intersecting: bool) -> bool {
        let current = self.in_view.entry(key).or_default();
        let before = *current;
        *current = current.observe(intersecting);
        before != *current
    }

    pub fn is_in_view(&self, key: &str) -> bool {
        self.assume_visible || self.in_view.get(key).is_some_and(Reveal::is_shown)
    }

    /// Degrade when the browser has no intersection source.
    pub fn assume_all_visible(&mut self) {
        self.assume_visible = true;
    }

    /// Per-block reveal state, keyed by block id
    #[cfg(test)]
    pub fn in_view(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.in_view.iter().map(|(key, reveal)| (*key, reveal.is_shown()))
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// A mobile navigation link was followed: closes the menu and yields
    /// the anchor the browser navigates to.
    pub fn follow_nav_link(&mut self, link: &NavLink) -> &'static str {
        self.menu.close();
        link.anchor
    }
}

/// `transition-delay` for the `index`-th staggered child
pub fn stagger_delay(index: u32) -> String {
    format!("transition-delay: {}ms;", index * REVEAL_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_variant_boundary() {
        for offset in [0.0, 1.0, 19.9, 20.0] {
            assert_eq!(NavbarVariant::for_offset(offset), NavbarVariant::Unscrolled, "{offset}");
        }
        for offset in [20.01, 21.0, 600.0, 10_000.0] {
            assert_eq!(NavbarVariant::for_offset(offset), NavbarVariant::Scrolled, "{offset}");
        }
    }

    #[test]
    fn test_navbar_class() {
        assert_eq!(NavbarVariant::Unscrolled.class(), "navbar");
        assert_eq!(NavbarVariant::Scrolled.class(), "navbar scrolled");
    }

    #[test]
    fn test_back_to_top_boundary() {
        for offset in [0.0, 21.0, 599.5, 600.0] {
            let control = BackToTop::for_offset(offset);
            assert_eq!(control.opacity(), 0.0, "{offset}");
            assert!(!control.is_interactive(), "{offset}");
        }
        for offset in [600.5, 601.0, 5_000.0] {
            let control = BackToTop::for_offset(offset);
            assert_eq!(control.opacity(), 1.0, "{offset}");
            assert!(control.is_interactive(), "{offset}");
        }
    }

    #[test]
    fn test_back_to_top_style() {
        assert_eq!(
            BackToTop::Hidden.style(),
            "opacity: 0; transform: scale(0.8); pointer-events: none;"
        );
        assert_eq!(
            BackToTop::Shown.style(),
            "opacity: 1; transform: scale(1); pointer-events: auto;"
        );
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let reveal = Reveal::default();
        assert_eq!(reveal.observe(false), Reveal::NotYetShown);

        let shown = reveal.observe(true);
        assert_eq!(shown, Reveal::Shown);
        assert_eq!(shown.observe(false), Reveal::Shown);
        assert_eq!(shown.observe(true), Reveal::Shown);
    }

    #[test]
    fn test_scroll_state_flags() {
        let mut state = ScrollState::new();
        assert!(!state.scrolled_past_threshold());
        assert!(!state.back_to_top_visible());

        state.on_scroll(300.0);
        assert!(state.scrolled_past_threshold());
        assert!(!state.back_to_top_visible());

        state.on_scroll(900.0);
        assert!(state.back_to_top_visible());

        state.on_scroll(0.0);
        assert!(!state.scrolled_past_threshold());
        assert!(!state.back_to_top_visible());
    }

    #[test]
    fn test_overscroll_and_nan_clamp() {
        let mut state = ScrollState::new();

        state.on_scroll(-40.0);
        assert_eq!(state.offset(), 0.0);

        state.on_scroll(f64::NAN);
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.navbar_variant(), NavbarVariant::Unscrolled);
    }

    #[test]
    fn test_section_stays_revealed_after_scrolling_out() {
        let mut state = ScrollState::new();
        assert!(!state.is_in_view("services"));

        assert!(!state.on_intersection("services", false));
        assert!(!state.is_in_view("services"));

        assert!(state.on_intersection("services", true));
        assert!(state.is_in_view("services"));

        assert!(!state.on_intersection("services", false));
        assert!(state.is_in_view("services"));
        assert!(!state.on_intersection("services", true));
    }

    #[test]
    fn test_sections_reveal_independently() {
        let mut state = ScrollState::new();
        state.on_intersection("about", true);
        state.on_intersection("packages", false);

        let map: Vec<_> = state.in_view().collect();
        assert_eq!(map, vec![("about", true), ("packages", false)]);
        assert!(!state.is_in_view("contact"));
    }

    #[test]
    fn test_assume_all_visible_fallback() {
        let mut state = ScrollState::new();
        state.assume_all_visible();

        assert!(state.is_in_view("about"));
        assert!(state.is_in_view("never-registered"));
    }

    #[test]
    fn test_menu_toggle_through_state() {
        let mut state = ScrollState::new();
        assert!(!state.menu_open());

        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_following_nav_link_closes_menu() {
        let link = NavLink {
            label: "Services",
            anchor: "#services",
        };
        let mut state = ScrollState::new();
        state.toggle_menu();

        let href = state.follow_nav_link(&link);

        assert_eq!(href, "#services");
        assert!(!state.menu_open());
    }

    #[test]
    fn test_following_nav_link_with_menu_closed() {
        let link = NavLink {
            label: "About",
            anchor: "#about",
        };
        let mut state = ScrollState::new();

        assert_eq!(state.follow_nav_link(&link), "#about");
        assert!(!state.menu_open());
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut state = ScrollState::new();
        state.toggle_menu();
        state.on_scroll(1_000.0);

        assert!(state.menu_open());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "transition-delay: 0ms;");
        assert_eq!(stagger_delay(3), "transition-delay: 300ms;");
    }
}
