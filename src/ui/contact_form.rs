//! Contact form that hands off to the visitor's mail client
//!
//! Submitting never reaches a server: the form composes a `mailto:` URI for
//! the deployment's recipient and navigates the document to it. Field values
//! stay in place afterwards.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::{ContactField, ContactForm, SiteSettings};
use crate::ui::common::{FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};

/// Send the document to the composed URI
#[cfg(not(feature = "ssr"))]
fn navigate_to(uri: &str) {
    if let Err(err) = window().location().set_href(uri) {
        leptos::logging::warn!("mail handoff failed: {:?}", err);
    }
}

#[cfg(feature = "ssr")]
fn navigate_to(_uri: &str) {}

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();
    let form = RwSignal::new(ContactForm::default());

    let field_value = move |field: ContactField| -> Signal<String> {
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    };
    let field_input = move |field: ContactField| -> Callback<String> {
        Callback::new(move |value: String| form.update(|f| f.set(field, value)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let recipient = match site.recipient() {
            Ok(recipient) => recipient,
            Err(err) => {
                leptos::logging::error!("{err}");
                return;
            }
        };

        match form.with_untracked(|f| f.compose(&recipient)) {
            Ok(uri) => navigate_to(uri.as_str()),
            Err(err) => leptos::logging::warn!("contact form not sent: {err}"),
        }
    };

    view! {
        <form
            class="contact-form"
            on:submit=on_submit
            aria-label=format!("Contact {}", site.brand)
        >
            <FormField
                id=ContactField::Name.as_str()
                label="Name"
                placeholder="Your name"
                autocomplete="name"
                required=true
                value=field_value(ContactField::Name)
                on_input=field_input(ContactField::Name)
            />
            <FormField
                id=ContactField::Email.as_str()
                label="Email"
                input_type="email"
                placeholder="your@email.com"
                autocomplete="email"
                required=true
                value=field_value(ContactField::Email)
                on_input=field_input(ContactField::Email)
            />
            <TextAreaField
                id=ContactField::Message.as_str()
                label="Message"
                placeholder="Tell me a bit about what you need..."
                required=true
                value=field_value(ContactField::Message)
                on_input=field_input(ContactField::Message)
            />
            <div class="form-submit">
                <button type="submit" class="btn-primary">
                    "Send Message"
                    <Icon name=icons::SEND size=16 class="icon-inverse" />
                </button>
            </div>
        </form>
    }
}
