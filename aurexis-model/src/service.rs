//! Service summaries and service detail pages.

use crate::coerce::{Fields, coerce_object, lenient, lenient_or_default};
use crate::merge::{Merge, merge_block, set, set_opt};
use aurexis_types::DocumentId;
use serde::{Deserialize, Serialize};

/// Heading used when a challenge block has no title of its own.
pub const DEFAULT_CHALLENGE_TITLE: &str = "Challenges we solve";
/// Banner heading used when neither remote nor base supplies one.
pub const DEFAULT_BANNER_HEADING: &str = "Book a strategy call";
/// Banner button label used when neither remote nor base supplies one.
pub const DEFAULT_BANNER_PRIMARY_LABEL: &str = "Chat with us";
/// Banner button target used when neither remote nor base supplies one.
pub const DEFAULT_BANNER_PRIMARY_LINK: &str = "/contact";

/// A service as listed on the services overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
}

impl ServiceItem {
    /// Builds a summary from a remote document.
    pub fn from_document(id: DocumentId, fields: &Fields) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            icon: String::new(),
            features: Vec::new(),
        }
        .merged_with_fields(fields)
    }
}

/// A headline statistic shown in a service hero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceStat {
    #[serde(deserialize_with = "lenient_or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub value: String,
}

/// One step of a service delivery process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessStep {
    #[serde(deserialize_with = "lenient_or_default")]
    pub step: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub description: String,
}

/// A card in the challenge or call-to-action section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentCard {
    #[serde(deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

coerce_object!(ServiceStat, ProcessStep, ContentCard);

/// Hero block of a service detail page. Every field is optional, so the
/// same shape doubles as its own override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHeroContent {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<ServiceStat>>,
}

impl Merge for ServiceHeroContent {
    type Patch = ServiceHeroContent;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set_opt(&mut self.badge, &patch.badge);
        set_opt(&mut self.headline, &patch.headline);
        set_opt(&mut self.highlight, &patch.highlight);
        set_opt(&mut self.subheadline, &patch.subheadline);
        set_opt(&mut self.description, &patch.description);
        set_opt(&mut self.stats, &patch.stats);
    }
}

/// "Challenges we solve" block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChallengeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cards: Vec<ContentCard>,
}

impl Default for ServiceChallengeContent {
    fn default() -> Self {
        Self {
            eyebrow: None,
            title: DEFAULT_CHALLENGE_TITLE.to_string(),
            highlight: None,
            description: None,
            cards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChallengePatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<ContentCard>>,
}

impl Merge for ServiceChallengeContent {
    type Patch = ServiceChallengePatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set_opt(&mut self.eyebrow, &patch.eyebrow);
        set(&mut self.title, &patch.title);
        set_opt(&mut self.highlight, &patch.highlight);
        set_opt(&mut self.description, &patch.description);
        set(&mut self.cards, &patch.cards);
    }
}

/// Closing call-to-action banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCtaBanner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub heading: String,
    pub body: String,
    pub primary_label: String,
    pub primary_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_link: Option<String>,
}

impl Default for ServiceCtaBanner {
    fn default() -> Self {
        Self {
            eyebrow: None,
            heading: DEFAULT_BANNER_HEADING.to_string(),
            body: String::new(),
            primary_label: DEFAULT_BANNER_PRIMARY_LABEL.to_string(),
            primary_link: DEFAULT_BANNER_PRIMARY_LINK.to_string(),
            secondary_label: None,
            secondary_link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCtaBannerPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub primary_label: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub primary_link: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub secondary_link: Option<String>,
}

impl Merge for ServiceCtaBanner {
    type Patch = ServiceCtaBannerPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set_opt(&mut self.eyebrow, &patch.eyebrow);
        set(&mut self.heading, &patch.heading);
        set(&mut self.body, &patch.body);
        set(&mut self.primary_label, &patch.primary_label);
        set(&mut self.primary_link, &patch.primary_link);
        set_opt(&mut self.secondary_label, &patch.secondary_label);
        set_opt(&mut self.secondary_link, &patch.secondary_link);
    }
}

/// Call-to-action section: optional intro, cards and the closing banner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCtaContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub cards: Vec<ContentCard>,
    pub banner: ServiceCtaBanner,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCtaPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<ContentCard>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub banner: Option<ServiceCtaBannerPatch>,
}

impl Merge for ServiceCtaContent {
    type Patch = ServiceCtaPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set_opt(&mut self.eyebrow, &patch.eyebrow);
        set_opt(&mut self.title, &patch.title);
        set_opt(&mut self.subtitle, &patch.subtitle);
        set(&mut self.cards, &patch.cards);
        if let Some(banner) = &patch.banner {
            self.banner.apply_patch(banner);
        }
    }
}

coerce_object!(
    ServiceHeroContent,
    ServiceChallengePatch,
    ServiceCtaBannerPatch,
    ServiceCtaPatch
);

/// Full content of a service detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailContent {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub tagline: String,
    pub long_description: String,
    pub benefits: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_content: Option<ServiceHeroContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_content: Option<ServiceChallengeContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_content: Option<ServiceCtaContent>,
}

impl ServiceDetailContent {
    /// Derives a minimal detail page from a service summary, for services
    /// that have no compiled detail of their own.
    pub fn from_summary(item: &ServiceItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            icon: item.icon.clone(),
            features: item.features.clone(),
            tagline: item.description.clone(),
            long_description: item.description.clone(),
            benefits: Vec::new(),
            process: Vec::new(),
            technologies: item.features.clone(),
            hero_content: None,
            challenge_content: None,
            cta_content: None,
        }
    }
}

/// Partial update for a service. Summary fields also apply to the matching
/// [`ServiceItem`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero_content: Option<ServiceHeroContent>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub challenge_content: Option<ServiceChallengePatch>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cta_content: Option<ServiceCtaPatch>,
}

impl Merge for ServiceItem {
    type Patch = ServiceDetailPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.title, &patch.title);
        set(&mut self.description, &patch.description);
        set(&mut self.icon, &patch.icon);
        set(&mut self.features, &patch.features);
    }
}

impl Merge for ServiceDetailContent {
    type Patch = ServiceDetailPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.title, &patch.title);
        set(&mut self.description, &patch.description);
        set(&mut self.icon, &patch.icon);
        set(&mut self.features, &patch.features);
        set(&mut self.tagline, &patch.tagline);
        set(&mut self.long_description, &patch.long_description);
        set(&mut self.benefits, &patch.benefits);
        set(&mut self.process, &patch.process);
        set(&mut self.technologies, &patch.technologies);

        self.hero_content = merge_block(
            self.hero_content.as_ref(),
            patch.hero_content.as_ref(),
            ServiceHeroContent::default,
            |hero, p| hero.apply_patch(p),
        );
        self.challenge_content = merge_block(
            self.challenge_content.as_ref(),
            patch.challenge_content.as_ref(),
            ServiceChallengeContent::default,
            |challenge, p| challenge.apply_patch(p),
        );
        self.cta_content = merge_block(
            self.cta_content.as_ref(),
            patch.cta_content.as_ref(),
            ServiceCtaContent::default,
            |cta, p| cta.apply_patch(p),
        );
    }
}
