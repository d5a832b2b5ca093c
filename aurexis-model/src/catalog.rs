//! Compiled-in default content.
//!
//! Every singleton and every pricing page has a complete default here, so
//! the content model is fully populated before (or without) any remote
//! store. Catalog collections (services, tiers, FAQs, testimonials) seed the
//! model until the first snapshot arrives.

use crate::content::{FaqItem, Testimonial};
use crate::pricing::{
    PricingCtas, PricingFaqItem, PricingHero, PricingMetric, PricingMetricBubble, PricingPageContent,
    PricingPageId, PricingPlan, PricingTier, RoiConfig, RoiSlider, SliderFormat,
};
use crate::service::{
    ContentCard, ProcessStep, ServiceChallengeContent, ServiceCtaBanner, ServiceCtaContent,
    ServiceDetailContent, ServiceHeroContent, ServiceItem, ServiceStat,
};
use crate::settings::{
    AboutPageSettings, Highlight, HomepageContent, HomepageSettings, SocialLinks, Stat, TeamMember,
};
use aurexis_types::DocumentId;
use std::collections::BTreeMap;

/// Booking link used by default calls to action.
pub const BOOKING_LINK: &str = "https://calendly.com/admin-aurexissolution/30min";

fn s(v: &str) -> String {
    v.to_string()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|v| v.to_string()).collect()
}

fn card(title: &str, description: &str) -> ContentCard {
    ContentCard {
        title: s(title),
        description: s(description),
        icon: None,
        link: None,
    }
}

fn step(n: &str, title: &str, description: &str) -> ProcessStep {
    ProcessStep {
        step: s(n),
        title: s(title),
        description: s(description),
    }
}

// ── Services ─────────────────────────────────────────────────────

pub fn services() -> Vec<ServiceItem> {
    let item = |id: &str, title: &str, description: &str, icon: &str, features: &[&str]| ServiceItem {
        id: DocumentId::from(id),
        title: s(title),
        description: s(description),
        icon: s(icon),
        features: list(features),
    };
    vec![
        item(
            "ai-automation",
            "AI Automation",
            "Agent pods that qualify leads, answer customers and run back-office workflows.",
            "bot",
            &["Lead concierge agents", "Workflow orchestration", "Human-in-loop approvals"],
        ),
        item(
            "app-development",
            "App Development",
            "Native and cross-platform mobile apps shipped in focused sprints.",
            "smartphone",
            &["iOS and Android", "Offline-first sync", "App store launch"],
        ),
        item(
            "data-analysis",
            "Data Analysis",
            "Dashboards and models that turn operational data into decisions.",
            "bar-chart",
            &["KPI dashboards", "Forecasting", "Data pipelines"],
        ),
        item(
            "web-development",
            "Web Development",
            "Fast marketing sites and web apps built to convert.",
            "globe",
            &["Headless CMS", "SEO foundations", "Performance budgets"],
        ),
        item(
            "cloud-solutions",
            "Cloud Solutions",
            "Cloud architecture, migration and managed operations.",
            "cloud",
            &["Migration planning", "Cost optimisation", "24/7 monitoring"],
        ),
    ]
}

/// Detail pages keyed by service id. Services without a richer page fall
/// back to [`ServiceDetailContent::from_summary`].
pub fn service_details() -> BTreeMap<DocumentId, ServiceDetailContent> {
    let mut details: BTreeMap<DocumentId, ServiceDetailContent> = services()
        .iter()
        .map(|item| (item.id.clone(), ServiceDetailContent::from_summary(item)))
        .collect();

    if let Some(ai) = details.get_mut(&DocumentId::from("ai-automation")) {
        ai.tagline = s("Automation that pays for itself in weeks");
        ai.long_description = s(
            "We design, deploy and operate AI agent pods that plug into the tools your team already uses.",
        );
        ai.benefits = list(&[
            "Respond to every lead in under a minute",
            "Cut repetitive admin by half",
            "Audit trail for every automated decision",
        ]);
        ai.process = vec![
            step("01", "Discovery", "Map the workflows worth automating."),
            step("02", "Blueprint", "Design agents, guardrails and hand-offs."),
            step("03", "Pilot", "Run a measured pilot against live traffic."),
            step("04", "Scale", "Roll out and monitor with a KPI cockpit."),
        ];
        ai.technologies = list(&["OpenAI", "LangChain", "HubSpot", "WhatsApp Business"]);
        ai.hero_content = Some(ServiceHeroContent {
            badge: Some(s("AI Automation")),
            headline: Some(s("Put your busywork")),
            highlight: Some(s("on autopilot")),
            subheadline: Some(s("Agent pods for sales, support and operations.")),
            description: None,
            stats: Some(vec![
                ServiceStat { label: s("Hours saved / week"), value: s("62") },
                ServiceStat { label: s("Payback period"), value: s("< 6 weeks") },
            ]),
        });
        ai.challenge_content = Some(ServiceChallengeContent {
            eyebrow: Some(s("Why teams call us")),
            cards: vec![
                card("Slow follow-up", "Leads go cold while the team is busy."),
                card("Manual reporting", "Hours lost every week to spreadsheets."),
            ],
            ..ServiceChallengeContent::default()
        });
        ai.cta_content = Some(ServiceCtaContent {
            eyebrow: Some(s("Ready when you are")),
            title: Some(s("Start with a pilot")),
            subtitle: None,
            cards: Vec::new(),
            banner: ServiceCtaBanner {
                body: s("A 30 minute call to scope your first automation."),
                secondary_label: Some(s("See pricing")),
                secondary_link: Some(s("/pricing/ai")),
                ..ServiceCtaBanner::default()
            },
        });
    }

    if let Some(web) = details.get_mut(&DocumentId::from("web-development")) {
        web.tagline = s("Websites that load fast and sell faster");
        web.benefits = list(&["Core Web Vitals in the green", "Editable without a developer"]);
        web.process = vec![
            step("01", "Strategy", "Positioning, sitemap and conversion goals."),
            step("02", "Design", "Wireframes to high fidelity."),
            step("03", "Build", "Component-driven development."),
        ];
        web.hero_content = Some(ServiceHeroContent {
            headline: Some(s("Your next website,")),
            highlight: Some(s("built to convert")),
            ..ServiceHeroContent::default()
        });
    }

    details
}

// ── Catalog collections ──────────────────────────────────────────

pub fn pricing_tiers() -> Vec<PricingTier> {
    let tier = |id: &str, name: &str, price: &str, description: &str, features: &[&str], recommended: bool| {
        PricingTier {
            id: DocumentId::from(id),
            name: s(name),
            price: s(price),
            period: s("/project"),
            description: s(description),
            features: list(features),
            recommended,
        }
    };
    vec![
        tier("starter", "Starter", "RM 2,999", "For small teams testing the waters.", &["Landing page", "Basic analytics"], false),
        tier("growth", "Growth", "RM 7,999", "For teams ready to scale.", &["Multi-page site", "CMS", "Automation pilot"], true),
        tier("enterprise", "Enterprise", "Custom", "For complex, regulated workloads.", &["Dedicated squad", "SLA", "Compliance reviews"], false),
    ]
}

pub fn faq_items() -> Vec<FaqItem> {
    let faq = |id: &str, question: &str, answer: &str| FaqItem {
        id: DocumentId::from(id),
        question: s(question),
        answer: s(answer),
    };
    vec![
        faq("timeline", "How long does a typical project take?", "Most projects ship in four to eight weeks."),
        faq("support", "Do you offer support after launch?", "Yes, every plan includes 30 days of support."),
        faq("payment", "How is payment structured?", "50% upfront and 50% on delivery."),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let testimonial = |id: &str, name: &str, role: &str, company: &str, content: &str| Testimonial {
        id: DocumentId::from(id),
        name: s(name),
        role: s(role),
        company: s(company),
        content: s(content),
        avatar: String::new(),
        rating: 5,
    };
    vec![
        testimonial("t1", "Aisyah Rahman", "COO", "Klang Logistics", "Our dispatch desk now runs itself overnight."),
        testimonial("t2", "Daniel Tan", "Founder", "Brewlab", "The new site doubled our booking rate in a month."),
    ]
}

// ── Singletons ───────────────────────────────────────────────────

pub fn homepage_settings() -> HomepageSettings {
    HomepageSettings {
        hero_title: s("We build software that grows your business"),
        hero_subtitle: s("AI automation, apps, data and cloud from one Kuala Lumpur team."),
        hero_cta_label: s("Book a strategy call"),
        hero_cta_link: s(BOOKING_LINK),
        show_testimonials: true,
        show_portfolio: true,
        show_pricing: true,
        show_blog: true,
        announcement: None,
    }
}

pub fn homepage_content() -> HomepageContent {
    HomepageContent {
        services_title: s("What we do"),
        services_subtitle: s("End-to-end delivery across five practices."),
        why_title: s("Why Aurexis"),
        why_subtitle: s("Senior engineers, fixed scopes, measurable outcomes."),
        highlights: vec![
            Highlight { title: s("Fixed scopes"), description: s("No surprise invoices."), icon: s("shield") },
            Highlight { title: s("Fast delivery"), description: s("Weekly demos from day one."), icon: s("rocket") },
        ],
        stats: vec![
            Stat { label: s("Projects shipped"), value: s("120+") },
            Stat { label: s("Client retention"), value: s("94%") },
        ],
        cta_title: s("Have a project in mind?"),
        cta_subtitle: s("Tell us about it and we will reply within a day."),
    }
}

pub fn social_links() -> SocialLinks {
    SocialLinks {
        facebook: s("https://facebook.com/aurexissolution"),
        instagram: s("https://instagram.com/aurexissolution"),
        linkedin: s("https://linkedin.com/company/aurexis-solution"),
        twitter: String::new(),
        github: String::new(),
        whatsapp: String::new(),
        email: s("hello@aurexissolution.com"),
    }
}

pub fn about_page_settings() -> AboutPageSettings {
    AboutPageSettings {
        headline: s("About Aurexis Solution"),
        subheadline: s("A small team with a big toolbox."),
        story: s("We started as two engineers automating our own busywork."),
        mission: s("Make modern software accessible to growing businesses."),
        vision: s("Every team running on tools that work for them."),
        values: list(&["Ownership", "Clarity", "Craft"]),
        team: vec![TeamMember {
            name: s("Aurexis Team"),
            role: s("Founders"),
            image: String::new(),
            bio: String::new(),
        }],
        founded_year: 2023,
    }
}

// ── Pricing pages ────────────────────────────────────────────────

fn plan(id: &str, name: &str, price: f64, description: &str, bullets: &[&str], recommended: bool) -> PricingPlan {
    PricingPlan {
        id: s(id),
        name: s(name),
        price_label: None,
        price_value: Some(price),
        price_suffix: Some(s("/mo")),
        best_for: None,
        signal: None,
        description: s(description),
        bullets: list(bullets),
        tags: Vec::new(),
        recommended,
        cta: Some(s(BOOKING_LINK)),
    }
}

fn faq(question: &str, answer: &str) -> PricingFaqItem {
    PricingFaqItem {
        question: s(question),
        answer: s(answer),
    }
}

fn pricing_page(title: &str, highlight: &str, subtitle: &str, plans: Vec<PricingPlan>) -> PricingPageContent {
    PricingPageContent {
        hero: PricingHero {
            eyebrow: None,
            badge: None,
            title: Some(s(title)),
            highlight: Some(s(highlight)),
            subtitle: Some(s(subtitle)),
            bullets: Vec::new(),
            chips: Vec::new(),
            metrics: Vec::new(),
            ctas: Some(PricingCtas {
                primary_label: Some(s("Book a call")),
                primary_link: Some(s(BOOKING_LINK)),
                secondary_label: None,
                secondary_link: None,
            }),
        },
        metric_bubbles: Vec::new(),
        plans,
        roi: None,
        faqs: vec![faq("Can I change plans later?", "Yes, upgrade or downgrade at any time.")],
        updated_at: None,
    }
}

fn ai_pricing_page() -> PricingPageContent {
    let mut page = pricing_page(
        "Magnetic AI Automation",
        "Pricing Hero",
        "AI pods for revenue teams, with live ROI before you commit.",
        vec![
            plan("pilot", "Pilot Pod", 4999.0, "One agent pod on one channel.", &["1 workflow", "Weekly report"], false),
            plan("growth", "Growth Pod", 9999.0, "Three pods across sales and ops.", &["3 workflows", "KPI cockpit"], true),
            plan("scale", "Scale Pod", 19999.0, "Unlimited pods with a dedicated squad.", &["Unlimited workflows", "SLA"], false),
        ],
    );
    page.hero.eyebrow = Some(s("MAGNETIC AI PODS"));
    page.hero.badge = Some(s("RM 4,999 LAUNCH"));
    page.hero.chips = list(&["Lead Concierge", "Ops Pilot", "Insights Copilot"]);
    page.hero.metrics = vec![
        PricingMetric { label: s("Avg. Hours Saved"), value: s("62 /week") },
        PricingMetric { label: s("Payback Period"), value: s("under 6 weeks") },
    ];
    page.metric_bubbles = vec![PricingMetricBubble {
        label: s("Automation uptime"),
        value: s("99.9%"),
        detail: None,
    }];
    let slider = |id: &str, label: &str, min: f64, max: f64, step: f64, default: f64, format: SliderFormat| RoiSlider {
        id: s(id),
        label: s(label),
        min,
        max,
        step,
        default_value: Some(default),
        unit_prefix: (format == SliderFormat::Currency).then(|| s("RM ")),
        unit_suffix: match format {
            SliderFormat::Percent => Some(s("%")),
            SliderFormat::Hours => Some(s("hrs")),
            _ => None,
        },
        format: Some(format),
    };
    page.roi = Some(RoiConfig {
        sliders: vec![
            slider("dailyLeads", "Daily qualified leads", 20.0, 200.0, 1.0, 80.0, SliderFormat::Number),
            slider("closeRate", "Close rate (%)", 5.0, 60.0, 1.0, 18.0, SliderFormat::Percent),
            slider("avgDealValue", "Average deal (RM)", 800.0, 6000.0, 100.0, 2200.0, SliderFormat::Currency),
            slider("hoursSaved", "Hours saved / week", 10.0, 120.0, 5.0, 55.0, SliderFormat::Hours),
        ],
    });
    page
}

/// Complete content for every pricing page.
pub fn pricing_pages() -> BTreeMap<PricingPageId, PricingPageContent> {
    let mut pages = BTreeMap::new();
    pages.insert(PricingPageId::Ai, ai_pricing_page());
    pages.insert(
        PricingPageId::AppDevelopment,
        pricing_page(
            "App Development",
            "Pricing",
            "Fixed-scope mobile builds.",
            vec![
                plan("mvp", "MVP", 14999.0, "Single platform MVP.", &["1 platform", "8 weeks"], false),
                plan("launch", "Launch", 29999.0, "iOS and Android launch.", &["2 platforms", "12 weeks"], true),
            ],
        ),
    );
    pages.insert(
        PricingPageId::DataAnalysis,
        pricing_page(
            "Data Analysis",
            "Pricing",
            "From spreadsheets to forecasts.",
            vec![
                plan("insights", "Insights", 3999.0, "Dashboard starter.", &["5 dashboards"], false),
                plan("forecast", "Forecast", 8999.0, "Models and pipelines.", &["Forecasting", "Pipelines"], true),
            ],
        ),
    );
    pages.insert(
        PricingPageId::WebDevelopment,
        pricing_page(
            "Web Development",
            "Pricing",
            "Sites that load fast and convert.",
            vec![
                plan("landing", "Landing", 2999.0, "One page, one goal.", &["1 page", "Analytics"], false),
                plan("business", "Business", 7999.0, "Full marketing site with CMS.", &["Up to 10 pages", "CMS"], true),
            ],
        ),
    );
    pages.insert(
        PricingPageId::CloudSolutions,
        pricing_page(
            "Cloud Solutions",
            "Pricing",
            "Migrations and managed operations.",
            vec![
                plan("assess", "Assessment", 4999.0, "Architecture review.", &["Cost report"], false),
                plan("managed", "Managed", 11999.0, "Ongoing operations.", &["24/7 monitoring", "Monthly review"], true),
            ],
        ),
    );
    pages
}
