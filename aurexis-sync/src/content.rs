//! The in-memory content model and its single writer.
//!
//! [`ContentStore`] owns the authoritative copy of everything the site
//! renders. Snapshot handlers and mutations replace whole slices through
//! [`ContentStore::update`], which runs under the channel's write lock, so a
//! reader never sees a half-applied change. Readers either take a cheap
//! borrow via [`ContentStore::read`] or subscribe for change notifications.

use aurexis_model::catalog;
use aurexis_model::{
    AboutPageSettings, BlogPost, FaqItem, HomepageContent, HomepageSettings, PortfolioProject,
    PricingPageContent, PricingPageId, PricingTier, ServiceDetailContent, ServiceItem,
    SocialLinks, Testimonial,
};
use aurexis_types::DocumentId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

/// Everything the site renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentModel {
    pub services: Vec<ServiceItem>,
    pub testimonials: Vec<Testimonial>,
    pub pricing: Vec<PricingTier>,
    pub faqs: Vec<FaqItem>,
    pub service_details: BTreeMap<DocumentId, ServiceDetailContent>,
    pub homepage_settings: HomepageSettings,
    pub homepage_content: HomepageContent,
    pub social_links: SocialLinks,
    pub about_page_settings: AboutPageSettings,
    pub pricing_pages: BTreeMap<PricingPageId, PricingPageContent>,
    pub projects: Vec<PortfolioProject>,
    pub blog_posts: Vec<BlogPost>,
}

impl ContentModel {
    /// The compiled catalog. Projects and blog posts start empty.
    pub fn defaults() -> Self {
        Self {
            services: catalog::services(),
            testimonials: catalog::testimonials(),
            pricing: catalog::pricing_tiers(),
            faqs: catalog::faq_items(),
            service_details: catalog::service_details(),
            homepage_settings: HomepageSettings::default(),
            homepage_content: HomepageContent::default(),
            social_links: SocialLinks::default(),
            about_page_settings: AboutPageSettings::default(),
            pricing_pages: catalog::pricing_pages(),
            projects: Vec::new(),
            blog_posts: Vec::new(),
        }
    }

    pub fn service(&self, id: &DocumentId) -> Option<&ServiceItem> {
        self.services.iter().find(|s| &s.id == id)
    }

    pub fn service_detail(&self, id: &DocumentId) -> Option<&ServiceDetailContent> {
        self.service_details.get(id)
    }

    /// Base a service-detail override merges onto: the in-memory value,
    /// else the compiled default, else one derived from the service summary.
    pub fn detail_base(&self, id: &DocumentId) -> Option<ServiceDetailContent> {
        if let Some(detail) = self.service_details.get(id) {
            return Some(detail.clone());
        }
        if let Some(detail) = catalog::service_details().remove(id) {
            return Some(detail);
        }
        self.service(id)
            .cloned()
            .or_else(|| catalog::services().into_iter().find(|s| &s.id == id))
            .map(|summary| ServiceDetailContent::from_summary(&summary))
    }

    pub fn pricing_page(&self, id: PricingPageId) -> Option<&PricingPageContent> {
        self.pricing_pages.get(&id)
    }

    pub fn project(&self, id: &DocumentId) -> Option<&PortfolioProject> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn blog_post(&self, id: &DocumentId) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| &p.id == id)
    }

    /// Looks up a post by its URL slug.
    pub fn blog_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Shared handle to the content model. Cloning yields another handle to the
/// same model.
#[derive(Clone)]
pub struct ContentStore {
    tx: Arc<watch::Sender<ContentModel>>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    /// Creates a store seeded with [`ContentModel::defaults`].
    pub fn new() -> Self {
        Self::with_model(ContentModel::defaults())
    }

    pub fn with_model(model: ContentModel) -> Self {
        let (tx, _) = watch::channel(model);
        Self { tx: Arc::new(tx) }
    }

    /// Clones the whole model.
    pub fn snapshot(&self) -> ContentModel {
        self.tx.borrow().clone()
    }

    /// Runs `f` against the current model without cloning it.
    ///
    /// `f` must not call back into this store.
    pub fn read<R>(&self, f: impl FnOnce(&ContentModel) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Receiver notified after every change.
    pub fn subscribe(&self) -> watch::Receiver<ContentModel> {
        self.tx.subscribe()
    }

    /// Applies `f` atomically and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut ContentModel)) {
        self.tx.send_modify(f);
    }

    /// Applies `f` atomically; subscribers are notified only if it returns
    /// `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut ContentModel) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Restores every slice to the compiled catalog.
    pub fn reset(&self) {
        self.tx.send_replace(ContentModel::defaults());
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}
