//! Not found page component
//!
//! Only `/` exists; every other path lands here.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::SiteSettings;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();

    // Report a real 404 status to the server response
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {}", site.brand) />

        <main class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" attr:class="btn-primary">
                "Go Home"
            </A>
        </main>
    }
}
