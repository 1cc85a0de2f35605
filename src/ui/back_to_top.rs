use leptos::prelude::*;

use crate::core::content::sections;
use crate::ui::icon::{Icon, icons};
use crate::ui::scroll::use_scroll_context;

/// Floating link back to the hero, shown once the page is scrolled past 600px
#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = use_scroll_context();
    let control = scroll.back_to_top;

    view! {
        <a
            href=format!("#{}", sections::HERO)
            class="back-to-top"
            aria-label="Back to top"
            style=move || control.get().style()
            tabindex=move || if control.get().is_interactive() { "0" } else { "-1" }
            aria-hidden=move || (!control.get().is_interactive()).to_string()
        >
            <Icon name=icons::CHEVRON_UP size=22 class="icon-inverse" />
        </a>
    }
}
