//! Core site model: static content, scroll state and the contact composer

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod mailto;
pub mod menu;
pub mod scroll;
pub mod seo;
pub mod site;
#[cfg(test)]
mod tests;

pub use content::{Highlight, NavLink, PricingTier, RateCard, ServiceOffering};
pub use mailto::{ContactField, ContactForm, ContactFormError, MailtoUri, Recipient};
pub use menu::MenuState;
pub use scroll::{BackToTop, NavbarVariant, Reveal, ScrollState};
pub use site::{ConfigError, SiteSettings};
