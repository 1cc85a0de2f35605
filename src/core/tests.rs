#[cfg(test)]
mod tests {
    use crate::core::content::{NAV_LINKS, sections};
    use crate::core::{ContactForm, ContactFormError, ContactField, ScrollState, SiteSettings};

    fn site() -> SiteSettings {
        SiteSettings {
            brand: "Dawn VA",
            contact_email: "hello@dawnva.co.uk",
            site_url: "https://dawnva.co.uk",
            profile_image: "/img/dawn.jpg",
        }
    }

    #[test]
    fn test_submit_with_configured_recipient() {
        let recipient = site().recipient().unwrap();
        let form = ContactForm::new("Jane Doe", "jane@example.com", "Need help");

        let uri = form.compose(&recipient).unwrap();

        assert_eq!(uri.recipient(), "hello@dawnva.co.uk");
        assert_eq!(uri.param("subject").as_deref(), Some("Enquiry from Jane Doe"));
        assert_eq!(
            uri.param("body").as_deref(),
            Some("Need help\n\nFrom: Jane Doe (jane@example.com)")
        );
    }

    #[test]
    fn test_second_deployment_uses_its_own_address() {
        let other = SiteSettings {
            contact_email: "dawn@example-va.co.uk",
            ..site()
        };
        let form = ContactForm::new("Jane Doe", "jane@example.com", "Need help");

        let uri = form.compose(&other.recipient().unwrap()).unwrap();

        assert!(uri.as_str().starts_with("mailto:dawn@example-va.co.uk?"));
    }

    #[test]
    fn test_empty_form_never_yields_a_uri() {
        let recipient = site().recipient().unwrap();
        let mut form = ContactForm::default();

        assert_eq!(
            form.compose(&recipient),
            Err(ContactFormError::MissingField(ContactField::Name))
        );

        form.set(ContactField::Name, "Jane Doe");
        form.set(ContactField::Message, "Need help");
        assert_eq!(
            form.compose(&recipient),
            Err(ContactFormError::MissingField(ContactField::Email))
        );
    }

    #[test]
    fn test_every_mobile_link_closes_menu() {
        for link in NAV_LINKS {
            let mut state = ScrollState::new();
            state.toggle_menu();

            let href = state.follow_nav_link(&link);

            assert_eq!(href, link.anchor);
            assert!(!state.menu_open(), "{} left the menu open", link.label);
        }
    }

    #[test]
    fn test_scroll_session() {
        let mut state = ScrollState::new();

        // Load, scroll down through every section, then jump back to the top
        for (i, id) in sections::ALL.iter().enumerate() {
            state.on_scroll(i as f64 * 700.0);
            state.on_intersection(*id, true);
        }
        assert!(state.scrolled_past_threshold());
        assert!(state.back_to_top_visible());

        state.on_scroll(0.0);
        for id in sections::ALL {
            state.on_intersection(id, false);
        }

        assert!(!state.scrolled_past_threshold());
        assert!(!state.back_to_top_visible());
        assert!(sections::ALL.iter().all(|id| state.is_in_view(id)));
    }
}
