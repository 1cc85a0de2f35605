//! Reveal-on-scroll wrapper
//!
//! Server-rendered markup is always visible. The hidden starting style
//! (`.reveal-ready .reveal:not(.visible)`) only applies after the client has
//! created an `IntersectionObserver`, so a browser without one, or without
//! JavaScript, simply shows the content.

use leptos::prelude::*;

use crate::core::scroll::stagger_delay;
use crate::ui::scroll::use_scroll_context;

/// Class put on `<html>` once reveal animations can run
#[cfg(not(feature = "ssr"))]
const REVEAL_READY_CLASS: &str = "reveal-ready";

#[cfg(not(feature = "ssr"))]
fn mark_reveal_ready() {
    if let Some(html) = document().document_element() {
        let _ = html.class_list().add_1(REVEAL_READY_CLASS);
    }
}

/// Observer of one block together with the callback it invokes
#[cfg(not(feature = "ssr"))]
struct RevealWatcher {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl Drop for RevealWatcher {
    fn drop(&mut self) {
        // The callback is freed with us; the observer must not call it again
        self.observer.disconnect();
    }
}

/// Fades its children in the first time they scroll into view
#[component]
pub fn AnimateOnScroll(
    /// Unique key of this block in the scroll state
    reveal_id: &'static str,
    /// Position in a staggered group; each step adds 100ms delay
    #[prop(default = 0)]
    delay: u32,
    /// Extra classes for the wrapper
    #[prop(default = "")]
    class: &'static str,
    /// Optional ARIA role, e.g. "listitem" inside a role="list" grid
    #[prop(optional)]
    role: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let scroll = use_scroll_context();
    let in_view = scroll.is_in_view(reveal_id);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        use crate::core::scroll::REVEAL_ROOT_MARGIN;

        let state = scroll.state;
        let watcher = StoredValue::new_local(None::<RevealWatcher>);

        Effect::new(move |_| {
            let Some(element) = node.get() else {
                return;
            };
            if state.with_untracked(|s| s.is_in_view(reveal_id)) {
                return;
            }

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            state.update(|s| {
                                s.on_intersection(reveal_id, true);
                            });
                            // One-shot: nothing left to watch for this block
                            observer.unobserve(&entry.target());
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&element);
                    mark_reveal_ready();
                    watcher.set_value(Some(RevealWatcher {
                        observer,
                        _callback: callback,
                    }));
                }
                Err(_) => {
                    warn!("IntersectionObserver unavailable; showing all content");
                    state.update(|s| s.assume_all_visible());
                }
            }
        });

        on_cleanup(move || {
            watcher.try_update_value(|slot| slot.take());
        });
    }

    let wrapper_class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div
            node_ref=node
            class=wrapper_class
            class:visible=move || in_view.get()
            style=stagger_delay(delay)
            role=role
            data-reveal=reveal_id
        >
            {children()}
        </div>
    }
}
