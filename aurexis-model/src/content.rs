//! Catalog entities without a compiled detail default: FAQs, testimonials,
//! portfolio projects and blog posts.

use crate::coerce::{Fields, coerce_enum, from_fields, lenient};
use crate::merge::{Merge, set, set_opt};
use aurexis_types::{DocumentId, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Author attributed to posts that do not name one.
pub const DEFAULT_AUTHOR: &str = "Aurexis Solution";
/// Title used for posts stored without one.
pub const UNTITLED_POST: &str = "Untitled Post";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: DocumentId,
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn from_document(id: DocumentId, fields: &Fields) -> Self {
        Self::from_patch(id, &from_fields(fields))
    }

    pub fn from_patch(id: DocumentId, patch: &FaqPatch) -> Self {
        Self {
            id,
            question: String::new(),
            answer: String::new(),
        }
        .merged(patch)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Merge for FaqItem {
    type Patch = FaqPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.question, &patch.question);
        set(&mut self.answer, &patch.answer);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DocumentId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
    pub rating: u32,
}

impl Testimonial {
    pub fn from_document(id: DocumentId, fields: &Fields) -> Self {
        Self::from_patch(id, &from_fields(fields))
    }

    /// Builds a testimonial from a patch. Rating defaults to five stars.
    pub fn from_patch(id: DocumentId, patch: &TestimonialPatch) -> Self {
        Self {
            id,
            name: String::new(),
            role: String::new(),
            company: String::new(),
            content: String::new(),
            avatar: String::new(),
            rating: 5,
        }
        .merged(patch)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
}

impl Merge for Testimonial {
    type Patch = TestimonialPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.name, &patch.name);
        set(&mut self.role, &patch.role);
        set(&mut self.company, &patch.company);
        set(&mut self.content, &patch.content);
        set(&mut self.avatar, &patch.avatar);
        set(&mut self.rating, &patch.rating);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Web,
    Mobile,
    Ai,
    Data,
    Cloud,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: DocumentId,
    pub title: String,
    pub summary: String,
    pub category: ProjectCategory,
    pub tech: Vec<String>,
    pub duration_days: u32,
    pub link: String,
    pub image: String,
    pub showcase_images: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl PortfolioProject {
    pub fn from_document(id: DocumentId, fields: &Fields) -> Self {
        Self::from_patch(id, &from_fields(fields))
    }

    /// Builds a project from a patch, defaulting every absent field.
    pub fn from_patch(id: DocumentId, patch: &ProjectPatch) -> Self {
        Self {
            id,
            title: String::new(),
            summary: String::new(),
            category: ProjectCategory::default(),
            tech: Vec::new(),
            duration_days: 0,
            link: String::new(),
            image: String::new(),
            showcase_images: Vec::new(),
            featured: false,
            order: None,
        }
        .merged(patch)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tech: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub showcase_images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Merge for PortfolioProject {
    type Patch = ProjectPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.title, &patch.title);
        set(&mut self.summary, &patch.summary);
        set(&mut self.category, &patch.category);
        set(&mut self.tech, &patch.tech);
        set(&mut self.duration_days, &patch.duration_days);
        set(&mut self.link, &patch.link);
        set(&mut self.image, &patch.image);
        set(&mut self.showcase_images, &patch.showcase_images);
        set(&mut self.featured, &patch.featured);
        set_opt(&mut self.order, &patch.order);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogPostStatus {
    #[default]
    Draft,
    Published,
}

coerce_enum!(ProjectCategory, BlogPostStatus);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DocumentId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub image_url: String,
    pub status: BlogPostStatus,
    pub tags: Vec<String>,
    pub generated_from: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BlogPost {
    /// Builds a post from a remote document. The slug falls back to the
    /// document id and `updated_at` to `created_at`.
    pub fn from_document(id: DocumentId, fields: &Fields) -> Self {
        Self::from_patch(id, &from_fields(fields))
    }

    /// Builds a post from a patch. A missing creation time means "now".
    pub fn from_patch(id: DocumentId, patch: &BlogPostPatch) -> Self {
        let created_at = patch.created_at.unwrap_or_else(Timestamp::now);
        Self {
            slug: id.to_string(),
            id,
            title: UNTITLED_POST.to_string(),
            content: String::new(),
            excerpt: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            image_url: String::new(),
            status: BlogPostStatus::default(),
            tags: Vec::new(),
            generated_from: String::new(),
            created_at,
            updated_at: created_at,
        }
        .merged(patch)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatch {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<BlogPostStatus>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub generated_from: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Merge for BlogPost {
    type Patch = BlogPostPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        set(&mut self.title, &patch.title);
        set(&mut self.slug, &patch.slug);
        set(&mut self.content, &patch.content);
        set(&mut self.excerpt, &patch.excerpt);
        set(&mut self.author, &patch.author);
        set(&mut self.image_url, &patch.image_url);
        set(&mut self.status, &patch.status);
        set(&mut self.tags, &patch.tags);
        set(&mut self.generated_from, &patch.generated_from);
        set(&mut self.created_at, &patch.created_at);
        set(&mut self.updated_at, &patch.updated_at);
    }
}

/// Sorts projects by their explicit order. Projects without one go last;
/// ties keep their current relative position.
pub fn sort_projects(projects: &mut [PortfolioProject]) {
    projects.sort_by(|a, b| match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Sorts posts newest first by creation time.
pub fn sort_blog_posts(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Turns a title into a URL slug: lowercase ASCII alphanumerics separated by
/// single dashes, with no leading or trailing dash.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}
