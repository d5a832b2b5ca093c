//! Remote collection names and document paths.
//!
//! Every entity group lives in its own top-level collection. Site-wide
//! singletons share the `siteSettings` collection, one document per key.

use aurexis_model::PricingPageId;
use aurexis_types::{DocumentId, DocumentPath};
use std::fmt;

pub const SERVICES: &str = "services";
pub const SERVICE_DETAILS: &str = "serviceDetails";
pub const TESTIMONIALS: &str = "testimonials";
pub const PRICING_TIERS: &str = "pricingTiers";
pub const FAQS: &str = "faqs";
pub const SITE_SETTINGS: &str = "siteSettings";
pub const PRICING_PAGES: &str = "pricingPages";
pub const PROJECTS: &str = "projects";
pub const BLOG_POSTS: &str = "blogPosts";

/// Keyed documents inside the `siteSettings` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingsKey {
    Homepage,
    HomepageContent,
    SocialLinks,
    AboutPage,
}

impl SettingsKey {
    pub const ALL: [SettingsKey; 4] = [
        SettingsKey::Homepage,
        SettingsKey::HomepageContent,
        SettingsKey::SocialLinks,
        SettingsKey::AboutPage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::HomepageContent => "homepageContent",
            Self::SocialLinks => "socialLinks",
            Self::AboutPage => "aboutPage",
        }
    }

    /// Path of this singleton's document.
    pub fn path(&self) -> DocumentPath {
        DocumentPath::new(SITE_SETTINGS, self.as_str())
    }
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path of a pricing page document.
pub fn pricing_page_path(id: PricingPageId) -> DocumentPath {
    DocumentPath::new(PRICING_PAGES, id.as_str())
}

/// Path of a document in an id-keyed collection.
pub fn document_path(collection: &str, id: &DocumentId) -> DocumentPath {
    DocumentPath::new(collection, id.as_str())
}
