//! Content model for the Aurexis site.
//!
//! Defines the typed content every page renders and the rules for combining
//! remote data with compiled defaults:
//! - [`catalog`]: compiled-in default content for every entity group
//! - [`Merge`]: per-shape merge of a partial override onto a complete value
//! - [`coerce`]: lenient decoding of untrusted remote documents
//!
//! Nothing here performs I/O. The sync crate feeds remote snapshots and
//! mutation inputs through these types.

pub mod catalog;
pub mod coerce;
mod content;
mod merge;
mod pricing;
mod service;
mod settings;

pub use coerce::{Coerce, Fields};
pub use content::{
    BlogPost, BlogPostPatch, BlogPostStatus, DEFAULT_AUTHOR, FaqItem, FaqPatch, PortfolioProject,
    ProjectCategory, ProjectPatch, Testimonial, TestimonialPatch, UNTITLED_POST, slugify,
    sort_blog_posts, sort_projects,
};
pub use merge::Merge;
pub use pricing::{
    PricingCtas, PricingFaqItem, PricingHero, PricingHeroPatch, PricingMetric, PricingMetricBubble,
    PricingPageContent, PricingPageId, PricingPagePatch, PricingPlan, PricingTier,
    PricingTierPatch, RoiConfig, RoiPatch, RoiSlider, SliderFormat,
};
pub use service::{
    ContentCard, DEFAULT_BANNER_HEADING, DEFAULT_BANNER_PRIMARY_LABEL, DEFAULT_BANNER_PRIMARY_LINK,
    DEFAULT_CHALLENGE_TITLE, ProcessStep, ServiceChallengeContent, ServiceChallengePatch,
    ServiceCtaBanner, ServiceCtaBannerPatch, ServiceCtaContent, ServiceCtaPatch,
    ServiceDetailContent, ServiceDetailPatch, ServiceHeroContent, ServiceItem, ServiceStat,
};
pub use settings::{
    AboutPageSettings, AboutPageSettingsPatch, Highlight, HomepageContent, HomepageContentPatch,
    HomepageSettings, HomepageSettingsPatch, SocialLinks, SocialLinksPatch, Stat, TeamMember,
};
