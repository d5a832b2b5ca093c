//! Per-entity-group write policies.
//!
//! Each group of content has a persistence mode (remote or local-only) and a
//! failure policy deciding whether a rejected remote write reaches the
//! caller. Defaults reproduce the site's historical behavior; deployments can
//! override any group through [`WritePolicies::set`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A family of content that shares one write policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityGroup {
    Services,
    Testimonials,
    PricingTiers,
    Faqs,
    PricingPages,
    HomepageSettings,
    HomepageContent,
    SocialLinks,
    AboutPage,
    Projects,
    BlogPosts,
}

impl EntityGroup {
    pub const ALL: [EntityGroup; 11] = [
        EntityGroup::Services,
        EntityGroup::Testimonials,
        EntityGroup::PricingTiers,
        EntityGroup::Faqs,
        EntityGroup::PricingPages,
        EntityGroup::HomepageSettings,
        EntityGroup::HomepageContent,
        EntityGroup::SocialLinks,
        EntityGroup::AboutPage,
        EntityGroup::Projects,
        EntityGroup::BlogPosts,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::PricingTiers => "pricing tiers",
            Self::Faqs => "faqs",
            Self::PricingPages => "pricing pages",
            Self::HomepageSettings => "homepage settings",
            Self::HomepageContent => "homepage content",
            Self::SocialLinks => "social links",
            Self::AboutPage => "about page",
            Self::Projects => "projects",
            Self::BlogPosts => "blog posts",
        }
    }
}

impl fmt::Display for EntityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a group's mutations are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Persistence {
    /// Mutations are written to the remote store.
    Remote,
    /// Mutations stay in process memory and are lost on restart.
    LocalOnly,
}

/// What a caller sees when a remote write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// The error is logged and returned to the caller.
    Propagate,
    /// The error is logged only; the caller sees success.
    Swallow,
}

/// Write policy for one entity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritePolicy {
    pub persistence: Persistence,
    pub on_failure: FailurePolicy,
}

impl WritePolicy {
    pub const REMOTE: WritePolicy = WritePolicy {
        persistence: Persistence::Remote,
        on_failure: FailurePolicy::Propagate,
    };

    pub const REMOTE_BEST_EFFORT: WritePolicy = WritePolicy {
        persistence: Persistence::Remote,
        on_failure: FailurePolicy::Swallow,
    };

    pub const LOCAL_ONLY: WritePolicy = WritePolicy {
        persistence: Persistence::LocalOnly,
        on_failure: FailurePolicy::Propagate,
    };

    /// Default policy for a group.
    pub const fn default_for(group: EntityGroup) -> WritePolicy {
        match group {
            EntityGroup::Testimonials | EntityGroup::Faqs => Self::LOCAL_ONLY,
            EntityGroup::HomepageSettings
            | EntityGroup::HomepageContent
            | EntityGroup::SocialLinks => Self::REMOTE_BEST_EFFORT,
            _ => Self::REMOTE,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.persistence == Persistence::Remote
    }
}

/// Policy table for every entity group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WritePolicies {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    overrides: BTreeMap<EntityGroup, WritePolicy>,
}

impl WritePolicies {
    /// Policy in effect for `group`.
    pub fn get(&self, group: EntityGroup) -> WritePolicy {
        self.overrides
            .get(&group)
            .copied()
            .unwrap_or(WritePolicy::default_for(group))
    }

    /// Overrides the policy for `group`.
    pub fn set(&mut self, group: EntityGroup, policy: WritePolicy) -> &mut Self {
        self.overrides.insert(group, policy);
        self
    }

    /// Builder-style variant of [`WritePolicies::set`].
    pub fn with(mut self, group: EntityGroup, policy: WritePolicy) -> Self {
        self.set(group, policy);
        self
    }

    /// Persists every group remotely, propagating failures.
    pub fn all_remote() -> Self {
        EntityGroup::ALL
            .iter()
            .fold(Self::default(), |policies, group| {
                policies.with(*group, WritePolicy::REMOTE)
            })
    }
}
