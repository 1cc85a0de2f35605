use leptos::prelude::*;

use crate::core::SiteSettings;
use crate::core::content::{NAV_LINKS, sections};
use crate::ui::scroll::use_scroll_context;

/// Fixed navigation bar with desktop links and a mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();
    let scroll = use_scroll_context();
    let state = scroll.state;
    let menu = Memo::new(move |_| state.with(|s| s.menu()));
    let (brand_head, brand_tail) = site.brand_parts();

    view! {
        <header role="banner">
            <nav class=move || scroll.navbar.get().class() aria-label="Main navigation">
                <a
                    href=format!("#{}", sections::HERO)
                    class="navbar-brand"
                    aria-label=format!("{} home", site.brand)
                >
                    {brand_head}" "<span>{brand_tail}</span>
                </a>

                <div class="navbar-links" role="menubar">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.anchor role="menuitem">{link.label}</a>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class=move || menu.get().hamburger_class()
                    on:click=move |_| state.update(|s| s.toggle_menu())
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    aria-controls="mobile-menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            // Mobile menu
            <div
                id="mobile-menu"
                class=move || menu.get().panel_class()
                role="menu"
                aria-label="Mobile navigation"
            >
                {NAV_LINKS
                    .into_iter()
                    .map(|link| {
                        // Default anchor navigation still runs after the handler
                        view! {
                            <a
                                href=link.anchor
                                role="menuitem"
                                on:click=move |_| state.update(|s| {
                                    s.follow_nav_link(&link);
                                })
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
