//! Pricing tiers and the per-service pricing pages.

use crate::coerce::{Fields, coerce_enum, coerce_object, lenient, lenient_or_default};
use crate::merge::{Merge, merge_block, set, set_opt};
use aurexis_types::{DocumentId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pricing tier shown on the general pricing section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub id: DocumentId,
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub recommended: bool,
}

impl PricingTier {
    pub fn from_document(id: DocumentId, fields: &Fields) -> Self {
        Self {
            id,
            name: String::new(),
            price: String::new(),
            period: String::new(),
            description: String::new(),
            features: Vec::new(),
            recommended: false,
        }
        .merged_with_fields(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTierPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub recommended: Option<bool>,
}

impl Merge for PricingTier {
    type Patch = PricingTierPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.name, &patch.name);
        set(&mut self.price, &patch.price);
        set(&mut self.period, &patch.period);
        set(&mut self.description, &patch.description);
        set(&mut self.features, &patch.features);
        set(&mut self.recommended, &patch.recommended);
    }
}

/// Identifies one of the fixed pricing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingPageId {
    Ai,
    AppDevelopment,
    DataAnalysis,
    WebDevelopment,
    CloudSolutions,
}

impl PricingPageId {
    /// Every pricing page, in display order.
    pub const ALL: [PricingPageId; 5] = [
        PricingPageId::Ai,
        PricingPageId::AppDevelopment,
        PricingPageId::DataAnalysis,
        PricingPageId::WebDevelopment,
        PricingPageId::CloudSolutions,
    ];

    /// The document key used in the remote store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PricingPageId::Ai => "ai",
            PricingPageId::AppDevelopment => "app-development",
            PricingPageId::DataAnalysis => "data-analysis",
            PricingPageId::WebDevelopment => "web-development",
            PricingPageId::CloudSolutions => "cloud-solutions",
        }
    }
}

impl fmt::Display for PricingPageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingPageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PricingPageId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown pricing page: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingMetric {
    #[serde(deserialize_with = "lenient_or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingMetricBubble {
    #[serde(deserialize_with = "lenient_or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    #[serde(deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub price_label: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub price_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub price_suffix: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub best_for: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub bullets: Vec<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_or_default")]
    pub recommended: bool,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

/// Display format of an ROI slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderFormat {
    Number,
    Currency,
    Percent,
    Hours,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoiSlider {
    #[serde(deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub min: f64,
    #[serde(deserialize_with = "lenient_or_default")]
    pub max: f64,
    #[serde(deserialize_with = "lenient_or_default")]
    pub step: f64,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub unit_prefix: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub unit_suffix: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub format: Option<SliderFormat>,
}

impl RoiSlider {
    /// Starting position of the slider.
    pub fn initial_value(&self) -> f64 {
        self.default_value.unwrap_or(self.min)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingFaqItem {
    #[serde(deserialize_with = "lenient_or_default")]
    pub question: String,
    #[serde(deserialize_with = "lenient_or_default")]
    pub answer: String,
}

coerce_enum!(SliderFormat);
coerce_object!(PricingMetric, PricingMetricBubble, PricingPlan, RoiSlider, PricingFaqItem);

/// Primary and secondary hero buttons. All-optional, so it merges field by
/// field with itself as the override shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCtas {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub primary_label: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub primary_link: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub secondary_link: Option<String>,
}

impl Merge for PricingCtas {
    type Patch = PricingCtas;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set_opt(&mut self.primary_label, &patch.primary_label);
        set_opt(&mut self.primary_link, &patch.primary_link);
        set_opt(&mut self.secondary_label, &patch.secondary_label);
        set_opt(&mut self.secondary_link, &patch.secondary_link);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingHero {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub bullets: Vec<String>,
    pub chips: Vec<String>,
    pub metrics: Vec<PricingMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctas: Option<PricingCtas>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingHeroPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub chips: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<PricingMetric>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ctas: Option<PricingCtas>,
}

impl Merge for PricingHero {
    type Patch = PricingHeroPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set_opt(&mut self.eyebrow, &patch.eyebrow);
        set_opt(&mut self.badge, &patch.badge);
        set_opt(&mut self.title, &patch.title);
        set_opt(&mut self.highlight, &patch.highlight);
        set_opt(&mut self.subtitle, &patch.subtitle);
        set(&mut self.bullets, &patch.bullets);
        set(&mut self.chips, &patch.chips);
        set(&mut self.metrics, &patch.metrics);
        self.ctas = merge_block(
            self.ctas.as_ref(),
            patch.ctas.as_ref(),
            PricingCtas::default,
            |ctas, p| ctas.apply_patch(p),
        );
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiConfig {
    pub sliders: Vec<RoiSlider>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sliders: Option<Vec<RoiSlider>>,
}

impl Merge for RoiConfig {
    type Patch = RoiPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.sliders, &patch.sliders);
    }
}

coerce_object!(PricingCtas, PricingHeroPatch, RoiPatch);

/// Everything rendered on one pricing page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPageContent {
    pub hero: PricingHero,
    pub metric_bubbles: Vec<PricingMetricBubble>,
    pub plans: Vec<PricingPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiConfig>,
    pub faqs: Vec<PricingFaqItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPagePatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hero: Option<PricingHeroPatch>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metric_bubbles: Option<Vec<PricingMetricBubble>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub plans: Option<Vec<PricingPlan>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub roi: Option<RoiPatch>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<PricingFaqItem>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Merge for PricingPageContent {
    type Patch = PricingPagePatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(hero) = &patch.hero {
            self.hero.apply_patch(hero);
        }
        set(&mut self.metric_bubbles, &patch.metric_bubbles);
        set(&mut self.plans, &patch.plans);
        self.roi = merge_block(
            self.roi.as_ref(),
            patch.roi.as_ref(),
            RoiConfig::default,
            |roi, p| roi.apply_patch(p),
        );
        set(&mut self.faqs, &patch.faqs);
        set_opt(&mut self.updated_at, &patch.updated_at);
    }
}
