//! Static page content
//!
//! All copy lives here as `'static` data so components only lay it out.

/// Fragment ids of the page landmarks, in page order
pub mod sections {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const SERVICES: &str = "services";
    pub const PACKAGES: &str = "packages";
    pub const WHY_ME: &str = "why-me";
    pub const CONTACT: &str = "contact";

    pub const ALL: [&str; 6] = [HERO, ABOUT, SERVICES, PACKAGES, WHY_ME, CONTACT];
}

/// Icons shipped in `public/icons`, by file stem
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_UP: &str = "chevron-up";
    pub const EYE: &str = "eye";
    pub const FOLDER_OPEN: &str = "folder-open";
    pub const HEART: &str = "heart";
    pub const MAIL: &str = "mail";
    pub const MEGAPHONE: &str = "megaphone";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const MOON: &str = "moon";
    pub const PALETTE: &str = "palette";
    pub const SEND: &str = "send";
    pub const SHIELD: &str = "shield";
    pub const SMILE: &str = "smile";
    pub const USERS: &str = "users";
    pub const ZAP: &str = "zap";

    #[cfg(test)]
    pub const ALL: [&str; 15] = [
        ARROW_RIGHT, CHEVRON_UP, EYE, FOLDER_OPEN, HEART, MAIL, MEGAPHONE, MESSAGE_SQUARE, MOON,
        PALETTE, SEND, SHIELD, SMILE, USERS, ZAP,
    ];
}

/// In-page navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Fragment including the leading `#`
    pub anchor: &'static str,
}

impl NavLink {
    /// Section id the anchor points at
    pub fn section_id(&self) -> &'static str {
        self.anchor.trim_start_matches('#')
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "Packages", anchor: "#packages" },
    NavLink { label: "Contact", anchor: "#contact" },
];

/// Icon plus short label, used by the trust signals and the "why me" grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    /// May contain `\n`; rendered with `white-space: pre-line`
    pub label: &'static str,
}

pub const TRUST_SIGNALS: [Highlight; 4] = [
    Highlight { icon: icons::MOON, label: "Evenings & Weekends" },
    Highlight { icon: icons::ZAP, label: "Quick Turnaround" },
    Highlight { icon: icons::EYE, label: "High Attention to Detail" },
    Highlight { icon: icons::SMILE, label: "Friendly & Reliable" },
];

pub const REASONS: [Highlight; 5] = [
    Highlight { icon: icons::SHIELD, label: "Calm &\nOrganised" },
    Highlight { icon: icons::MESSAGE_SQUARE, label: "Professional\nCommunication" },
    Highlight { icon: icons::USERS, label: "Flexible &\nTailored" },
    Highlight { icon: icons::ZAP, label: "Quick\nTurnaround" },
    Highlight { icon: icons::HEART, label: "Friendly &\nReliable" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        icon: icons::MESSAGE_SQUARE,
        title: "Internal Communications",
        description: "Clear, consistent messaging that keeps your people informed.",
        items: &[
            "Staff updates & announcements",
            "Newsletters & bulletins",
            "Employee engagement content",
            "Clear, professional messaging",
        ],
    },
    ServiceOffering {
        icon: icons::MEGAPHONE,
        title: "Marketing Support",
        description: "Day-to-day marketing handled so your channels never go quiet.",
        items: &[
            "Social media management",
            "Email marketing campaigns",
            "Blog posts & content calendars",
            "Research & website builds/updates",
        ],
    },
    ServiceOffering {
        icon: icons::PALETTE,
        title: "Design & Collateral",
        description: "Polished, on-brand materials for print and screen.",
        items: &[
            "Flyers, posters & brochures",
            "PDF guides & branded templates",
            "Presentations & event materials",
            "Canva & InDesign expertise",
        ],
    },
    ServiceOffering {
        icon: icons::FOLDER_OPEN,
        title: "Admin & Organisation",
        description: "The behind-the-scenes work that keeps everything running.",
        items: &[
            "Document creation & formatting",
            "Proofreading & editing",
            "File organisation & management",
            "Research & reporting",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Display price including the currency symbol
    pub price: &'static str,
    pub billing_unit: &'static str,
    pub hours: &'static str,
    pub bullets: &'static [&'static str],
    pub featured: bool,
}

impl PricingTier {
    /// Numeric part of the price, e.g. "120" for "£120"
    pub fn amount(&self) -> &'static str {
        self.price.trim_start_matches(|c: char| !c.is_ascii_digit())
    }

    /// Accessible summary of the card
    pub fn aria_label(&self) -> String {
        format!("{} package, {} per {}", self.name, self.price, self.billing_unit)
    }
}

/// ISO 4217 code matching the `£` prices below
pub const CURRENCY: &str = "GBP";

pub const PACKAGES: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "£120",
        billing_unit: "month",
        hours: "5 hours / month",
        bullets: &[
            "Light admin support",
            "Occasional comms tasks",
            "Small marketing tasks",
            "Email support",
        ],
        featured: false,
    },
    PricingTier {
        name: "Standard",
        price: "£240",
        billing_unit: "month",
        hours: "10 hours / month",
        bullets: &[
            "Regular weekly support",
            "Admin, comms or marketing",
            "Content creation & scheduling",
            "Priority email support",
        ],
        featured: true,
    },
    PricingTier {
        name: "Pro",
        price: "£480",
        billing_unit: "month",
        hours: "20 hours / month",
        bullets: &[
            "Consistent weekly support",
            "Full-service across all areas",
            "Strategy & planning included",
            "Priority turnaround",
        ],
        featured: false,
    },
];

/// Ad-hoc rates shown under the packages grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    pub hourly: &'static str,
    pub hourly_scope: &'static str,
    pub design: &'static str,
    pub design_scope: &'static str,
    pub note: &'static str,
}

pub const RATE_CARD: RateCard = RateCard {
    hourly: "£25",
    hourly_scope: "admin, comms, marketing",
    design: "£30–£35",
    design_scope: "Canva & InDesign",
    note: "Fixed price projects available on request.",
};

pub const TAGLINE: &str = "UK-Based Virtual Assistant";

pub const META_DESCRIPTION: &str = "UK-based Virtual Assistant specialising in internal comms, \
    marketing support and admin. Working evenings & weekends so you wake up to it done.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_ships_an_svg() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in icons::ALL {
            assert!(dir.join(format!("{name}.svg")).is_file(), "missing icon {name}");
        }
    }

    #[test]
    fn test_content_icons_are_known() {
        let used = TRUST_SIGNALS
            .iter()
            .chain(REASONS.iter())
            .map(|h| h.icon)
            .chain(SERVICES.iter().map(|s| s.icon));
        for name in used {
            assert!(icons::ALL.contains(&name), "{name} is not a shipped icon");
        }
    }

    #[test]
    fn test_nav_links_point_at_sections() {
        for link in NAV_LINKS {
            assert!(link.anchor.starts_with('#'));
            assert!(
                sections::ALL.contains(&link.section_id()),
                "{} has no matching section",
                link.anchor
            );
        }
    }

    #[test]
    fn test_exactly_one_featured_package() {
        assert_eq!(PACKAGES.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_package_amounts() {
        let amounts: Vec<_> = PACKAGES.iter().map(PricingTier::amount).collect();
        assert_eq!(amounts, vec!["120", "240", "480"]);
    }

    #[test]
    fn test_package_aria_label() {
        assert_eq!(PACKAGES[0].aria_label(), "Starter package, £120 per month");
    }

    #[test]
    fn test_every_list_is_non_empty() {
        assert!(SERVICES.iter().all(|s| !s.items.is_empty()));
        assert!(PACKAGES.iter().all(|p| !p.bullets.is_empty()));
    }

    #[test]
    fn test_section_ids_unique() {
        let mut ids = sections::ALL.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), sections::ALL.len());
    }
}
