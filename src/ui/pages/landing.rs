//! Landing page component
//!
//! The whole site is this one page:
//! - SEO meta tags and JSON-LD structured data
//! - Hero with headshot and call to action
//! - About section with trust signals
//! - Services grid
//! - Packages with pricing and the ad-hoc rate card
//! - "Why choose" grid
//! - Contact details and the mailto contact form
//! - Footer and back-to-top control

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SiteSettings;
use crate::core::content::{
    Highlight, META_DESCRIPTION, NAV_LINKS, PACKAGES, PricingTier, RATE_CARD, REASONS, SERVICES,
    ServiceOffering, TAGLINE, TRUST_SIGNALS, sections,
};
use crate::core::seo::structured_data_script;
use crate::ui::back_to_top::BackToTop;
use crate::ui::contact_form::ContactFormPanel;
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;
use crate::ui::profile_image::ProfileImage;
use crate::ui::reveal::AnimateOnScroll;
use crate::ui::scroll::provide_scroll_context;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_scroll_context();

    view! {
        <SeoMeta />

        <Navbar />
        <main>
            <Hero />
            <About />
            <Services />
            <Packages />
            <WhyMe />
            <Contact />
        </main>
        <Footer />
        <BackToTop />
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();
    let title = format!("{} | {}", site.brand, TAGLINE);
    let canonical = site.canonical_url();
    let image = format!("{}{}", site.site_url.trim_end_matches('/'), site.profile_image);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=META_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=META_DESCRIPTION />
        <Meta property="og:image" content=image />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=structured_data_script(&site)></script>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id=sections::HERO aria-label="Introduction">
            <div class="hero-bg-shape hero-bg-shape-1" aria-hidden="true"></div>
            <div class="hero-bg-shape hero-bg-shape-2" aria-hidden="true"></div>
            <div class="hero-bg-shape hero-bg-shape-3" aria-hidden="true"></div>

            // Hero content animates on load, not on scroll
            <div class="hero-inner">
                <div class="hero-content">
                    <p class="section-label fade-up">{TAGLINE}</p>
                    <h1 class="fade-up fade-delay-1">
                        "Wake Up to "<span class="highlight">"It Done."</span>
                    </h1>
                    <p class="fade-up fade-delay-2">
                        "UK-based Virtual Assistant specialising in internal comms, marketing \
                         support, and admin, working evenings & weekends so you don't have to."
                    </p>
                    <div class="fade-up fade-delay-3">
                        <a href=format!("#{}", sections::CONTACT) class="btn-primary">
                            "Let's Chat"
                            <Icon name=icons::ARROW_RIGHT size=18 class="icon-inverse" />
                        </a>
                    </div>
                </div>

                <div class="hero-visual scale-in">
                    <ProfileImage alt="Dawn, UK-based Virtual Assistant specialising in internal comms, marketing and admin support" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <section class="about" id=sections::ABOUT aria-labelledby="about-title">
            <div class="section-container">
                <AnimateOnScroll reveal_id="about-heading">
                    <p class="section-label">"About Me"</p>
                    <h2 class="section-title" id="about-title">
                        "Hello, I'm Dawn, Your UK Virtual Assistant"
                    </h2>
                </AnimateOnScroll>

                <div class="about-content">
                    <AnimateOnScroll reveal_id="about-text" delay=1 class="about-text">
                        <p>
                            "I'm a UK-based Virtual Assistant with a calm, organised approach and a \
                             genuine love for getting things done well. Whether it's crafting clear \
                             internal communications, supporting your marketing efforts, or keeping \
                             your admin running smoothly, I'm here to help."
                        </p>
                        <p>
                            "I work evenings and weekends, which means you can hand things off at \
                             the end of your day and wake up to find them done. Professional \
                             communication, meticulous attention to detail, and a friendly approach: \
                             that's what you can always expect from your virtual assistant."
                        </p>
                    </AnimateOnScroll>

                    <div class="trust-signals" role="list" aria-label=format!("Key benefits of working with {}", site.brand)>
                        {TRUST_SIGNALS
                            .into_iter()
                            .enumerate()
                            .map(|(i, item)| view! { <TrustItem item=item index={i as u32} /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

const TRUST_KEYS: [&str; TRUST_SIGNALS.len()] = ["trust-0", "trust-1", "trust-2", "trust-3"];

#[component]
fn TrustItem(item: Highlight, index: u32) -> impl IntoView {
    view! {
        <AnimateOnScroll reveal_id={TRUST_KEYS[index as usize]} delay=index class="trust-item" role="listitem">
            <div class="trust-icon">
                <Icon name=item.icon />
            </div>
            <span>{item.label}</span>
        </AnimateOnScroll>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section class="services" id=sections::SERVICES aria-labelledby="services-title">
            <div class="section-container">
                <AnimateOnScroll reveal_id="services-heading">
                    <p class="section-label">"What I Do"</p>
                    <h2 class="section-title" id="services-title">"Virtual Assistant Services"</h2>
                    <p class="section-subtitle">
                        "From internal comms to creative design, I offer flexible virtual \
                         assistant support tailored to what you actually need."
                    </p>
                </AnimateOnScroll>

                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .enumerate()
                        .map(|(i, service)| view! { <ServiceCard service=service index={i as u32} /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

const SERVICE_KEYS: [&str; SERVICES.len()] = ["service-0", "service-1", "service-2", "service-3"];

#[component]
fn ServiceCard(service: ServiceOffering, index: u32) -> impl IntoView {
    view! {
        <AnimateOnScroll reveal_id={SERVICE_KEYS[index as usize]} delay=index>
            <article class="service-card">
                <div class="service-card-header">
                    <div class="service-icon-wrapper">
                        <Icon name=service.icon size=22 />
                    </div>
                    <h3>{service.title}</h3>
                </div>
                <p class="service-description">{service.description}</p>
                <ul>
                    {service.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </article>
        </AnimateOnScroll>
    }
}

#[component]
fn Packages() -> impl IntoView {
    view! {
        <section class="packages" id=sections::PACKAGES aria-labelledby="packages-title">
            <div class="section-container">
                <AnimateOnScroll reveal_id="packages-heading">
                    <p class="section-label">"Pricing"</p>
                    <h2 class="section-title" id="packages-title">
                        "Virtual Assistant Packages & Pricing"
                    </h2>
                    <p class="section-subtitle">
                        "Simple, transparent pricing. Pick the level of support that suits you, \
                         or get in touch for something bespoke."
                    </p>
                </AnimateOnScroll>

                <div class="packages-grid">
                    {PACKAGES
                        .into_iter()
                        .enumerate()
                        .map(|(i, tier)| view! { <PackageCard tier=tier index={i as u32} /> })
                        .collect_view()}
                </div>

                <AnimateOnScroll reveal_id="packages-note" delay=2>
                    <p class="packages-note">
                        <strong>"Hourly rate:"</strong>
                        {format!(" {} ({})", RATE_CARD.hourly, RATE_CARD.hourly_scope)}
                        <span class="separator" aria-hidden="true">" | "</span>
                        <strong>"Design rate:"</strong>
                        {format!(" {} ({})", RATE_CARD.design, RATE_CARD.design_scope)}
                        <span class="separator" aria-hidden="true">" | "</span>
                        {RATE_CARD.note}
                    </p>
                </AnimateOnScroll>
            </div>
        </section>
    }
}

const PACKAGE_KEYS: [&str; PACKAGES.len()] = ["package-0", "package-1", "package-2"];

/// Pricing card component
#[component]
fn PackageCard(tier: PricingTier, index: u32) -> impl IntoView {
    let card_class = if tier.featured {
        "package-card featured"
    } else {
        "package-card"
    };

    view! {
        <AnimateOnScroll reveal_id={PACKAGE_KEYS[index as usize]} delay=index>
            <article class=card_class aria-label=tier.aria_label()>
                {tier.featured.then(|| view! {
                    <div class="popular-badge">"Most Popular"</div>
                })}
                <h3>{tier.name}</h3>
                <div class="package-price">
                    {tier.price}<span>{format!("/{}", tier.billing_unit)}</span>
                </div>
                <div class="package-hours">{tier.hours}</div>
                <ul>
                    {tier.bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
                </ul>
            </article>
        </AnimateOnScroll>
    }
}

#[component]
fn WhyMe() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <section class="why-me" id=sections::WHY_ME aria-labelledby="why-title">
            <div class="section-container">
                <AnimateOnScroll reveal_id="why-heading" class="centered">
                    <p class="section-label">"The Difference"</p>
                    <h2 class="section-title" id="why-title">{format!("Why Choose {}", site.brand)}</h2>
                </AnimateOnScroll>

                <div class="why-grid" role="list" aria-label=format!("Reasons to work with {}", site.brand)>
                    {REASONS
                        .into_iter()
                        .enumerate()
                        .map(|(i, reason)| view! { <ReasonItem reason=reason index={i as u32} /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

const REASON_KEYS: [&str; REASONS.len()] = ["reason-0", "reason-1", "reason-2", "reason-3", "reason-4"];

#[component]
fn ReasonItem(reason: Highlight, index: u32) -> impl IntoView {
    view! {
        <AnimateOnScroll reveal_id={REASON_KEYS[index as usize]} delay=index class="why-item" role="listitem">
            <div class="why-icon">
                <Icon name=reason.icon size=24 />
            </div>
            <h4 class="pre-line">{reason.label}</h4>
        </AnimateOnScroll>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <section class="contact" id=sections::CONTACT aria-labelledby="contact-title">
            <div class="section-container">
                <div class="contact-inner">
                    <AnimateOnScroll reveal_id="contact-text" class="contact-text">
                        <p class="section-label">"Get In Touch"</p>
                        <h2 class="section-title" id="contact-title">
                            "Let's Chat About Your VA Support"
                        </h2>
                        <p>
                            "Need reliable virtual assistant support outside the usual 9–5? I'd love \
                             to hear from you. Whether you have a clear idea of what you need, or \
                             just want to explore how a UK-based VA can help, drop me a message."
                        </p>
                        <a
                            href=format!("mailto:{}", site.contact_email)
                            class="contact-email"
                            aria-label=format!("Email {} at {}", site.brand, site.contact_email)
                        >
                            <Icon name=icons::MAIL size=18 />
                            {site.contact_email}
                        </a>
                    </AnimateOnScroll>

                    <AnimateOnScroll reveal_id="contact-form" delay=1>
                        <ContactFormPanel />
                    </AnimateOnScroll>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let site = use_context::<SiteSettings>().unwrap_or_default();

    view! {
        <footer class="footer" role="contentinfo">
            <div class="footer-inner">
                <p class="footer-copy">{format!("© 2025 {}. All rights reserved.", site.brand)}</p>
                <nav class="footer-links" aria-label="Footer navigation">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| view! { <a href=link.anchor>{link.label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
