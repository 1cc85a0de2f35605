//! Structured data for search engines
//!
//! Builds the JSON-LD `ProfessionalService` document embedded in the page
//! head from the same static content the page renders.

use serde_json::{Value, json};

use crate::core::content::{CURRENCY, META_DESCRIPTION, PACKAGES, SERVICES};
use crate::core::site::SiteSettings;

/// JSON-LD document describing the business and its packages
pub fn structured_data(site: &SiteSettings) -> Value {
    let offers: Vec<Value> = PACKAGES
        .iter()
        .map(|tier| {
            json!({
                "@type": "Offer",
                "name": format!("{} package", tier.name),
                "description": tier.hours,
                "price": tier.amount(),
                "priceCurrency": CURRENCY,
                "priceSpecification": {
                    "@type": "UnitPriceSpecification",
                    "price": tier.amount(),
                    "priceCurrency": CURRENCY,
                    "unitText": tier.billing_unit,
                },
            })
        })
        .collect();

    let services: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": site.brand,
        "description": META_DESCRIPTION,
        "url": site.canonical_url(),
        "email": site.contact_email,
        "image": format!("{}{}", site.site_url.trim_end_matches('/'), site.profile_image),
        "areaServed": "GB",
        "knowsAbout": services,
        "makesOffer": offers,
    })
}

/// Serialized form for an inline `<script type="application/ld+json">`.
///
/// `<` is escaped so the payload can never close the script element.
pub fn structured_data_script(site: &SiteSettings) -> String {
    structured_data(site).to_string().replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteSettings {
        SiteSettings {
            brand: "Dawn VA",
            contact_email: "hello@dawnva.co.uk",
            site_url: "https://dawnva.co.uk/",
            profile_image: "/img/dawn.jpg",
        }
    }

    #[test]
    fn test_document_identity() {
        let doc = structured_data(&site());

        assert_eq!(doc["@type"], "ProfessionalService");
        assert_eq!(doc["name"], "Dawn VA");
        assert_eq!(doc["url"], "https://dawnva.co.uk/");
        assert_eq!(doc["email"], "hello@dawnva.co.uk");
        assert_eq!(doc["image"], "https://dawnva.co.uk/img/dawn.jpg");
    }

    #[test]
    fn test_offers_follow_packages() {
        let doc = structured_data(&site());
        let offers = doc["makesOffer"].as_array().unwrap();

        assert_eq!(offers.len(), PACKAGES.len());
        assert_eq!(offers[1]["name"], "Standard package");
        assert_eq!(offers[1]["price"], "240");
        assert_eq!(offers[1]["priceCurrency"], "GBP");
        assert_eq!(offers[1]["priceSpecification"]["unitText"], "month");
    }

    #[test]
    fn test_script_payload_parses_back() {
        let payload = structured_data_script(&site());
        let parsed: Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed, structured_data(&site()));
    }

    #[test]
    fn test_script_payload_cannot_close_script_tag() {
        let hostile = SiteSettings {
            brand: "</script><script>alert(1)</script>",
            ..site()
        };
        let payload = structured_data_script(&hostile);

        assert!(!payload.contains("</script>"));
        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["name"], "</script><script>alert(1)</script>");
    }
}
