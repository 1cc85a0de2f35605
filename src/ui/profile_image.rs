//! Headshot with a placeholder fallback
//!
//! A missing or broken image swaps to a circle with the brand initial, so the
//! hero layout keeps its shape.

use leptos::prelude::*;

use crate::core::SiteSettings;

/// Profile headshot for the hero section
#[component]
pub fn ProfileImage(
    /// Alt text for the photo
    alt: &'static str,
    #[prop(default = 220)]
    size: u32,
) -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();
    let failed = RwSignal::new(false);
    let img = NodeRef::<leptos::html::Img>::new();

    // The error event can fire before hydration attaches `on:error`
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(el) = img.get() {
            if el.complete() && el.natural_width() == 0 {
                leptos::logging::warn!("profile image {} failed to load", site.profile_image);
                failed.set(true);
            }
        }
    });

    view! {
        <div class="headshot">
            <Show
                when=move || !failed.get()
                fallback=move || view! {
                    <div class="headshot-placeholder" role="img" aria-label=alt>
                        <span aria-hidden="true">{site.brand_initial().to_string()}</span>
                    </div>
                }
            >
                <img
                    node_ref=img
                    src=site.profile_image
                    alt=alt
                    width=size
                    height=size
                    loading="eager"
                    on:error=move |_| failed.set(true)
                />
            </Show>
        </div>
    }
}
