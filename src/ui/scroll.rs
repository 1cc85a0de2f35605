//! Scroll context shared by the navbar, reveal blocks and back-to-top control
//!
//! Provides:
//! - A single reactive [`ScrollState`] fed by the window scroll event
//! - Memoized navbar / back-to-top variants and per-block reveal flags, so a
//!   scroll tick only re-renders what crossed a boundary

use leptos::prelude::*;

use crate::core::{BackToTop, NavbarVariant, ScrollState};

/// Reactive handle on the page's scroll state
#[derive(Clone, Copy)]
pub struct ScrollContext {
    pub state: RwSignal<ScrollState>,
    pub navbar: Memo<NavbarVariant>,
    pub back_to_top: Memo<BackToTop>,
}

impl ScrollContext {
    /// Reveal flag of one block; changes at most once
    pub fn is_in_view(&self, key: &'static str) -> Signal<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_in_view(key))).into()
    }
}

/// Read the current window offset into the state
#[cfg(not(feature = "ssr"))]
fn sync_offset(state: RwSignal<ScrollState>) {
    if let Ok(offset) = window().scroll_y() {
        state.update(|s| s.on_scroll(offset));
    }
}

/// Provide scroll context to the page
pub fn provide_scroll_context() -> ScrollContext {
    let state = RwSignal::new(ScrollState::new());
    let navbar = Memo::new(move |_| state.with(|s| s.navbar_variant()));
    let back_to_top = Memo::new(move |_| state.with(|s| s.back_to_top()));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        // A reload can restore a non-zero offset before any scroll event fires
        Effect::new(move |_| sync_offset(state));

        let handle_scroll = window_event_listener(scroll, move |_| sync_offset(state));

        on_cleanup(move || handle_scroll.remove());
    }

    let ctx = ScrollContext {
        state,
        navbar,
        back_to_top,
    };

    provide_context(ctx);

    ctx
}

/// Use scroll context from anywhere below the landing page
pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext should be provided")
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_scrolling_leaves_reveal_readers_alone() {
        let owner = Owner::new();
        owner.set();

        let ctx = provide_scroll_context();
        let in_view = ctx.is_in_view("about-heading");
        let runs = Arc::new(AtomicUsize::new(0));
        let reader = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                in_view.get()
            }
        });

        assert!(!reader.get());
        for offset in [10.0, 300.0, 900.0, 40.0] {
            ctx.state.update(|s| s.on_scroll(offset));
            assert!(!reader.get());
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.navbar.get(), NavbarVariant::Scrolled);

        ctx.state.update(|s| {
            s.on_intersection("about-heading", true);
        });
        assert!(reader.get());
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
