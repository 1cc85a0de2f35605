//! Server runtime configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site identity is compiled in (see [`SiteSettings`]); the runtime copy of
//! those variables is only compared against it, and a mismatch stops the
//! server before it can hand enquiries to the wrong inbox.

use crate::core::site::{ConfigError, SiteSettings};

pub const DEFAULT_LOG_FILTER: &str = "dawnva=info,tower_http=info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `RUST_LOG` directive for tracing-subscriber
    pub log_filter: Option<String>,

    /// Runtime value of `DAWNVA_CONTACT_EMAIL`
    pub contact_email: Option<String>,

    /// Runtime value of `DAWNVA_SITE_URL`
    pub site_url: Option<String>,

    /// Runtime value of `DAWNVA_BRAND`
    pub brand: Option<String>,

    /// Runtime value of `DAWNVA_PROFILE_IMAGE`
    pub profile_image: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("RUST_LOG").ok(),
            contact_email: std::env::var("DAWNVA_CONTACT_EMAIL").ok(),
            site_url: std::env::var("DAWNVA_SITE_URL").ok(),
            brand: std::env::var("DAWNVA_BRAND").ok(),
            profile_image: std::env::var("DAWNVA_PROFILE_IMAGE").ok(),
        }
    }

    /// Log filter, falling back to the crate default
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Variables set at runtime to a value other than the compiled one.
    ///
    /// Those need a rebuild to take effect.
    pub fn drift(&self, site: &SiteSettings) -> Vec<&'static str> {
        [
            ("DAWNVA_BRAND", &self.brand, site.brand),
            ("DAWNVA_CONTACT_EMAIL", &self.contact_email, site.contact_email),
            ("DAWNVA_SITE_URL", &self.site_url, site.site_url),
            ("DAWNVA_PROFILE_IMAGE", &self.profile_image, site.profile_image),
        ]
        .into_iter()
        .filter(|(_, runtime, compiled)| runtime.as_deref().is_some_and(|v| v != *compiled))
        .map(|(var, _, _)| var)
        .collect()
    }

    /// Fail when the runtime environment disagrees with the compiled site.
    pub fn check(&self, site: &SiteSettings) -> Result<(), ConfigError> {
        match self.drift(site).first() {
            Some(&var) => Err(ConfigError::StaleBuild(var)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteSettings {
        SiteSettings {
            brand: "Dawn VA",
            contact_email: "hello@dawnva.co.uk",
            site_url: "https://dawnva.co.uk",
            profile_image: "/img/dawn.jpg",
        }
    }

    #[test]
    fn test_log_filter_default() {
        let config = Config::default();

        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_blank_uses_default() {
        let config = Config {
            log_filter: Some("  ".to_string()),
            ..Config::default()
        };

        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_filter_override() {
        let config = Config {
            log_filter: Some("debug".to_string()),
            ..Config::default()
        };

        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_no_drift_when_unset() {
        assert!(Config::default().drift(&site()).is_empty());
    }

    #[test]
    fn test_no_drift_when_matching() {
        let config = Config {
            contact_email: Some("hello@dawnva.co.uk".to_string()),
            site_url: Some("https://dawnva.co.uk".to_string()),
            ..Config::default()
        };

        assert!(config.drift(&site()).is_empty());
    }

    #[test]
    fn test_drift_reports_changed_variables() {
        let config = Config {
            contact_email: Some("dawn@other-va.co.uk".to_string()),
            site_url: Some("https://other-va.co.uk".to_string()),
            ..Config::default()
        };

        assert_eq!(
            config.drift(&site()),
            vec!["DAWNVA_CONTACT_EMAIL", "DAWNVA_SITE_URL"]
        );
    }

    #[test]
    fn test_drift_covers_every_site_variable() {
        let config = Config {
            brand: Some("Other VA".to_string()),
            profile_image: Some("/img/other.jpg".to_string()),
            ..Config::default()
        };

        assert_eq!(
            config.drift(&site()),
            vec!["DAWNVA_BRAND", "DAWNVA_PROFILE_IMAGE"]
        );
    }

    #[test]
    fn test_check_rejects_recipient_from_another_deployment() {
        // .env names a second business but the build kept the first address
        let config = Config {
            contact_email: Some("dawn@second-va.co.uk".to_string()),
            ..Config::default()
        };

        assert_eq!(
            config.check(&site()),
            Err(ConfigError::StaleBuild("DAWNVA_CONTACT_EMAIL"))
        );
    }

    #[test]
    fn test_check_passes_when_build_matches() {
        let config = Config {
            contact_email: Some("hello@dawnva.co.uk".to_string()),
            ..Config::default()
        };

        assert_eq!(config.check(&site()), Ok(()));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check it loads
        let config = Config::from_env();
        let _ = config.log_filter();
    }
}
