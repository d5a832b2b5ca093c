//! Singleton site settings. Each has exactly one live document and is never
//! absent: `Default` yields the compiled catalog value.

use crate::catalog;
use crate::coerce::{coerce_object, lenient, lenient_or_default};
use crate::merge::{Merge, set, set_opt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageSettings {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_label: String,
    pub hero_cta_link: String,
    pub show_testimonials: bool,
    pub show_portfolio: bool,
    pub show_pricing: bool,
    pub show_blog: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

impl Default for HomepageSettings {
    fn default() -> Self {
        catalog::homepage_settings()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageSettingsPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero_cta_label: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero_cta_link: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_testimonials: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_portfolio: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_pricing: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_blog: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

impl Merge for HomepageSettings {
    type Patch = HomepageSettingsPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.hero_title, &patch.hero_title);
        set(&mut self.hero_subtitle, &patch.hero_subtitle);
        set(&mut self.hero_cta_label, &patch.hero_cta_label);
        set(&mut self.hero_cta_link, &patch.hero_cta_link);
        set(&mut self.show_testimonials, &patch.show_testimonials);
        set(&mut self.show_portfolio, &patch.show_portfolio);
        set(&mut self.show_pricing, &patch.show_pricing);
        set(&mut self.show_blog, &patch.show_blog);
        set_opt(&mut self.announcement, &patch.announcement);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Highlight {
    #[serde(deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    #[serde(deserialize_with = "lenient_or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub role: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub image: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub bio: String,
}

coerce_object!(Highlight, Stat, TeamMember);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageContent {
    pub services_title: String,
    pub services_subtitle: String,
    pub why_title: String,
    pub why_subtitle: String,
    pub highlights: Vec<Highlight>,
    pub stats: Vec<Stat>,
    pub cta_title: String,
    pub cta_subtitle: String,
}

impl Default for HomepageContent {
    fn default() -> Self {
        catalog::homepage_content()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageContentPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub services_title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub services_subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub why_title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub why_subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<Highlight>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cta_title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cta_subtitle: Option<String>,
}

impl Merge for HomepageContent {
    type Patch = HomepageContentPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.services_title, &patch.services_title);
        set(&mut self.services_subtitle, &patch.services_subtitle);
        set(&mut self.why_title, &patch.why_title);
        set(&mut self.why_subtitle, &patch.why_subtitle);
        set(&mut self.highlights, &patch.highlights);
        set(&mut self.stats, &patch.stats);
        set(&mut self.cta_title, &patch.cta_title);
        set(&mut self.cta_subtitle, &patch.cta_subtitle);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
    pub github: String,
    pub whatsapp: String,
    pub email: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        catalog::social_links()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Merge for SocialLinks {
    type Patch = SocialLinksPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.facebook, &patch.facebook);
        set(&mut self.instagram, &patch.instagram);
        set(&mut self.linkedin, &patch.linkedin);
        set(&mut self.twitter, &patch.twitter);
        set(&mut self.github, &patch.github);
        set(&mut self.whatsapp, &patch.whatsapp);
        set(&mut self.email, &patch.email);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageSettings {
    pub headline: String,
    pub subheadline: String,
    pub story: String,
    pub mission: String,
    pub vision: String,
    pub values: Vec<String>,
    pub team: Vec<TeamMember>,
    pub founded_year: u32,
}

impl Default for AboutPageSettings {
    fn default() -> Self {
        catalog::about_page_settings()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageSettingsPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<TeamMember>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u32>,
}

impl Merge for AboutPageSettings {
    type Patch = AboutPageSettingsPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.headline, &patch.headline);
        set(&mut self.subheadline, &patch.subheadline);
        set(&mut self.story, &patch.story);
        set(&mut self.mission, &patch.mission);
        set(&mut self.vision, &patch.vision);
        set(&mut self.values, &patch.values);
        set(&mut self.team, &patch.team);
        set(&mut self.founded_year, &patch.founded_year);
    }
}
