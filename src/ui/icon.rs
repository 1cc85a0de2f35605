use leptos::prelude::*;

pub use crate::core::content::icons;

#[component]
pub fn Icon(
    /// Icon name, file stem under /icons
    name: &'static str,
    /// CSS classes
    #[prop(default = "icon")]
    class: &'static str,
    /// Rendered width and height in px
    #[prop(default = 20)]
    size: u32,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            width=size
            height=size
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}
