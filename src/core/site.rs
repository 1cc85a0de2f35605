//! Deployment identity of a site instance.
//!
//! Every value here is read at compile time so the server render and the
//! hydrated WASM bundle agree on it. Two deployments differ only by the
//! environment they were built with:
//!
//! ```text
//! DAWNVA_CONTACT_EMAIL=hello@dawnva.co.uk cargo leptos build --release
//! ```
//!
//! `build.rs` forwards the same variables from `.env`, so a deployment
//! configured through that file gets its own values compiled in.

use thiserror::Error;

use crate::core::mailto::Recipient;

pub const DEFAULT_BRAND: &str = "Dawn VA";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@dawnva.co.uk";
pub const DEFAULT_SITE_URL: &str = "https://dawnva.co.uk";
pub const DEFAULT_PROFILE_IMAGE: &str = "/img/dawn.jpg";

/// Errors raised while validating deployment configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DAWNVA_CONTACT_EMAIL is not a usable mail address: {0:?}")]
    InvalidRecipient(String),
    #[error("DAWNVA_SITE_URL must be an absolute http(s) URL: {0:?}")]
    InvalidSiteUrl(String),
    #[error("{0} differs from the value compiled into this build; rebuild to apply it")]
    StaleBuild(&'static str),
}

/// Identity and contact details of one deployed site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSettings {
    /// Brand shown in the navbar, footer and page title
    pub brand: &'static str,
    /// Address the contact form hands off to
    pub contact_email: &'static str,
    /// Public origin used for canonical and Open Graph links
    pub site_url: &'static str,
    /// Path of the headshot served from the asset directory
    pub profile_image: &'static str,
}

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

impl SiteSettings {
    /// Settings baked in by the build environment.
    pub const fn compiled() -> Self {
        Self {
            brand: or_default(option_env!("DAWNVA_BRAND"), DEFAULT_BRAND),
            contact_email: or_default(option_env!("DAWNVA_CONTACT_EMAIL"), DEFAULT_CONTACT_EMAIL),
            site_url: or_default(option_env!("DAWNVA_SITE_URL"), DEFAULT_SITE_URL),
            profile_image: or_default(option_env!("DAWNVA_PROFILE_IMAGE"), DEFAULT_PROFILE_IMAGE),
        }
    }

    /// Check the values a deployment can get wrong.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recipient()?;

        let url = self.site_url;
        let has_scheme = url.starts_with("https://") || url.starts_with("http://");
        let host = url.split_once("://").map(|(_, rest)| rest).unwrap_or_default();
        if !has_scheme || host.trim_end_matches('/').is_empty() || url.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidSiteUrl(url.to_string()));
        }

        Ok(())
    }

    /// Contact address as a mail recipient
    pub fn recipient(&self) -> Result<Recipient, ConfigError> {
        Recipient::parse(self.contact_email)
            .map_err(|_| ConfigError::InvalidRecipient(self.contact_email.to_string()))
    }

    /// Site origin with exactly one trailing slash
    pub fn canonical_url(&self) -> String {
        format!("{}/", self.site_url.trim_end_matches('/'))
    }

    /// Brand split so the last word can be accented, e.g. ("Dawn", "VA")
    pub fn brand_parts(&self) -> (&'static str, &'static str) {
        match self.brand.rsplit_once(' ') {
            Some((head, tail)) => (head, tail),
            None => (self.brand, ""),
        }
    }

    /// Initial used by the headshot placeholder
    pub fn brand_initial(&self) -> char {
        self.brand
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::compiled()
    }
}
